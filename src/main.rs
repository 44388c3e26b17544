use clap::Parser;
use snf_locator::core::ConfigProvider;
use snf_locator::utils::{logger, validation::Validate};
use snf_locator::{
    CliConfig, DeliveryLocation, DeliveryLocationService, FileStore, HttpAreaLookup, LocatorError,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    match &args.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            logger::init_cli_logger(args.verbose || config.verbose());

            if let Err(e) = config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                std::process::exit(2);
            }

            run(&config, &args).await
        }
        None => {
            logger::init_cli_logger(args.verbose);

            if let Err(e) = args.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                std::process::exit(2);
            }

            run(&args, &args).await
        }
    }
}

async fn run<C: ConfigProvider>(config: &C, args: &CliConfig) -> anyhow::Result<()> {
    tracing::debug!(
        "Using lookup endpoint {} and storage path {}",
        config.lookup_endpoint(),
        config.storage_path()
    );

    let store = FileStore::new(config.storage_path().to_string());
    let lookup = HttpAreaLookup::from_config(config);
    let service = DeliveryLocationService::new(store, lookup);

    if let Err(e) = service.migrate_from_legacy_pincode().await {
        tracing::warn!("Legacy pincode migration failed, continuing: {}", e);
    }

    if args.clear {
        service.clear_current_location().await?;
        println!("Delivery location cleared");
        return Ok(());
    }

    if let Some(pincode) = &args.pincode {
        return resolve(&service, pincode).await;
    }

    match service.current_location().await? {
        Some(location) => print_location(&location),
        None => println!("No delivery location set. Pass a 6-digit pincode to resolve one."),
    }

    Ok(())
}

async fn resolve(
    service: &DeliveryLocationService<FileStore, HttpAreaLookup>,
    pincode: &str,
) -> anyhow::Result<()> {
    match service.update_location_by_pincode(pincode).await {
        Ok(Some(location)) => {
            println!("Delivery location set");
            print_location(&location);
        }
        Ok(None) => {
            println!(
                "Pincode {} is not serviceable right now. Try a different pincode.",
                pincode
            );
        }
        Err(LocatorError::InvalidPincode { pincode }) => {
            eprintln!("'{}' is not a valid pincode: enter exactly 6 digits", pincode);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Could not resolve pincode {}: {}", pincode, e);
            eprintln!("Could not reach the area lookup service. Try again later.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_location(location: &DeliveryLocation) {
    println!("  pincode: {}", location.postal_code);
    if let (Some(id), Some(name)) = (&location.depot_id, &location.depot_name) {
        println!("  depot:   {} ({})", name, id);
    }
    if let (Some(id), Some(name)) = (&location.area_id, &location.area_name) {
        println!("  area:    {} ({})", name, id);
    }
}
