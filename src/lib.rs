pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use self::core::{
    engine::{GeneratorEngine, RunSummary},
    pipeline::DescriptorPipeline,
};
pub use domain::model::{BackImageRule, Descriptor, DescriptorSet};
pub use utils::error::{DescriptorError, Result};
