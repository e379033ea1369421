use clap::Parser;
use std::path::Path;
use tennis_etl::utils::{logger, validation::Validate};
use tennis_etl::{download, Cli, EtlError, Settings};

fn load_settings(path: Option<&Path>) -> Result<Settings, EtlError> {
    let settings = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            Settings::from_file(path)?
        }
        None => Settings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting tennis-etl");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let request = cli.command.to_request();

    match download(&request, &settings).await {
        Ok(summary) => {
            println!(
                "✅ Saved {} rows x {} columns to {}",
                summary.rows,
                summary.columns,
                summary.path.display()
            );
        }
        Err(e) => {
            tracing::error!("❌ Download failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
