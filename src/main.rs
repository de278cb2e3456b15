use clap::Parser;
use tablesalt_descriptors::config::prompt::prompt_for_root;
use tablesalt_descriptors::utils::error::{DescriptorError, ErrorSeverity};
use tablesalt_descriptors::utils::{logger, validation::Validate};
use tablesalt_descriptors::{CliConfig, DescriptorPipeline, GeneratorEngine, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tablesalt-descriptors");
    tracing::debug!("CLI config: {:?}", config);

    if config.path.is_none() {
        let stdin = std::io::stdin();
        match prompt_for_root(stdin.lock(), std::io::stdout()) {
            Ok(path) => config.path = Some(path),
            Err(e) => exit_with(e),
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let root = config.path.clone().unwrap_or_default();
    let storage = LocalStorage::new(root);
    let pipeline = DescriptorPipeline::new(storage, config);
    let engine = GeneratorEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) if summary.written => {
            tracing::info!(
                "✅ {} descriptor(s) written to {}",
                summary.descriptor_count,
                summary.output_path
            );
        }
        Ok(summary) => {
            tracing::info!(
                "🔍 Dry run, {} descriptor(s), {} not written",
                summary.descriptor_count,
                summary.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(e);
        }
    }

    Ok(())
}

fn exit_with(e: DescriptorError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
