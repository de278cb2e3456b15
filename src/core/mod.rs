pub mod back_image;
pub mod engine;
pub mod output;
pub mod pipeline;
pub mod scanner;

pub use crate::domain::model::{
    BackImageRule, Descriptor, DescriptorSet, DirEntry, EntryKind, LoadReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
