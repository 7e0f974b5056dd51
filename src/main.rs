use clap::Parser;
use recip_validate::utils::logger;
use recip_validate::{core::runner, ApiConfig, CliConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting recip-validate");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }

    let api = match ApiConfig::from_env() {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("API configuration failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runner::run(&config, api).await {
        tracing::error!("Validation run failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
