use anyhow::Context;
use clap::Parser;
use tablesalt_descriptors::core::ConfigProvider;
use tablesalt_descriptors::utils::{logger, validation::Validate};
use tablesalt_descriptors::{DescriptorPipeline, GeneratorEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-descriptors")]
#[command(about = "Descriptor generator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "descriptors.toml")]
    config: String,

    /// Override the asset folder from config
    #[arg(long)]
    path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Print the manifest without writing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(path) = args.path {
        tracing::info!("🔧 Asset folder overridden to: {}", path);
        config.scan.root = path;
    }
    if args.dry_run {
        config.load.dry_run = true;
    }

    config
        .validate()
        .with_context(|| format!("Invalid configuration in '{}'", args.config))?;

    display_config_summary(&config);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(config.root_path().to_string());
    let pipeline = DescriptorPipeline::new(storage, config);
    let engine = GeneratorEngine::new_with_monitoring(pipeline, monitor_enabled);

    let summary = engine.run().await.map_err(|e| {
        tracing::error!("❌ Generation failed: {} ({:?})", e, e.category());
        anyhow::anyhow!("{}\n💡 {}", e.user_friendly_message(), e.recovery_suggestion())
    })?;

    tracing::info!(
        "{} {} descriptor(s), back image: {}, {}",
        if summary.written { "✅" } else { "🔍" },
        summary.descriptor_count,
        summary.back_image.as_deref().unwrap_or("none"),
        if summary.written { "saved" } else { "dry run, not saved" }
    );

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Asset folder: {}", config.root_path());
    tracing::info!("  Output: {}", config.output_filename());
    tracing::info!("  Back image rule: {}", config.back_image_rule());
    tracing::info!("  Excluded: {}", config.exclude_extensions().join(", "));
    if config.dry_run() {
        tracing::info!("  🔍 DRY RUN MODE ENABLED");
    }
}
