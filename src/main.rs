use anyhow::Context;
use clap::Parser;
use middle_earth_data::app::report::{self, OutputFormat};
use middle_earth_data::config::cli::Command;
use middle_earth_data::utils::{logger, validation::Validate};
use middle_earth_data::{Catalog, CliConfig, DataService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let service_config = match config.load_service_config().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(service_config) => service_config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if service_config.logging.json {
        logger::init_json_logger(&service_config.logging.level);
    } else {
        logger::init_cli_logger(config.verbose, &service_config.logging.level);
    }

    tracing::info!("Starting middle-earth CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let service = DataService::with_config(&service_config)?;
    let format = config.format;

    let output = match config.command {
        Command::Fellowship { race: Some(race) } => {
            report::render_characters(&service.members_of_race(race), format)?
        }
        Command::Fellowship { race: None } => {
            report::render_characters(&service.fellowship(), format)?
        }
        Command::Orcs => report::render_characters(&service.orcs_with_hobbit_prisoners(), format)?,
        Command::RingBearers => report::render_ring_bearers(&service.ring_bearers(), format)?,
        Command::Films => report::render_films(service.films(), format)?,
        Command::Character { name } => match service.character(&name) {
            Some(character) => report::render_characters(&[character], format)?,
            None => {
                eprintln!("❌ No character named {}", name);
                std::process::exit(2);
            }
        },
        Command::Update => {
            let updated = service.update().await.context("update failed")?;
            match format {
                OutputFormat::Json => serde_json::json!({ "updated": updated }).to_string(),
                OutputFormat::Text => format!("✅ Update finished: {}", updated),
            }
        }
    };

    println!("{}", output);
    Ok(())
}
