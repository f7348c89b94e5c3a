use chrono::Local;
use clap::Parser;
use food_truck_finder::utils::{logger, validation::Validate};
use food_truck_finder::{CliConfig, FinderEngine, HttpVendorSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting food-truck-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = HttpVendorSource::new(&config)?;
    let engine = FinderEngine::new(source, config);

    let now = Local::now().naive_local();
    let stdin = std::io::stdin();

    match engine.run(now, stdin.lock(), std::io::stdout()).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
