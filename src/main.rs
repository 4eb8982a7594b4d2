use clap::Parser;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{CliConfig, LocalStorage, SiteEngine, SitePipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting portfolio-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SiteEngine::new(SitePipeline::new(storage, config));

    let outcome = if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        engine.dry_run().await.and_then(|content| {
            println!("{}", serde_json::to_string_pretty(&content)?);
            Ok(())
        })
    } else {
        engine.run().await.map(|written| {
            println!("✅ Site generated successfully!");
            for path in written {
                println!("📁 {}", path);
            }
        })
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Site generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
