pub mod cli;
pub mod prompt;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{BackImageRule, ConfigProvider};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tablesalt-descriptors")]
#[command(about = "Generates a descriptors.json for the tablesalt importer from a folder of images")]
pub struct CliConfig {
    /// Asset folder to scan; prompted for when omitted
    pub path: Option<String>,

    /// How the shared back image is recognised
    #[arg(long, value_enum, default_value_t = BackImageRule::Infix)]
    pub back_rule: BackImageRule,

    /// Name of the file written inside the asset folder
    #[arg(long, default_value = "descriptors.json")]
    pub output_file: String,

    /// File extensions to leave out of the manifest
    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub exclude_ext: Vec<String>,

    /// Print the manifest without writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory and timing after each phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn root_path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    fn output_filename(&self) -> &str {
        &self.output_file
    }

    fn exclude_extensions(&self) -> &[String] {
        &self.exclude_ext
    }

    fn back_image_rule(&self) -> BackImageRule {
        self.back_rule
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let path = validation::validate_required_field("path", &self.path)?;
        validation::validate_path("path", path)?;
        validation::validate_output_filename("output_file", &self.output_file)?;
        validation::validate_extensions("exclude_ext", &self.exclude_ext)?;
        Ok(())
    }
}
