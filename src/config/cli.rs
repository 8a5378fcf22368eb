use crate::app::report::OutputFormat;
use crate::config::toml_config::ServiceConfig;
use crate::domain::model::Race;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the nine members of the fellowship
    Fellowship {
        #[arg(long, help = "Only members of this race")]
        race: Option<Race>,
    },
    /// List the orcs and their hobbit prisoners
    Orcs,
    /// Show who bears each ring
    RingBearers,
    /// List the films
    Films,
    /// Look up a single character by exact name
    Character { name: String },
    /// Run the slow update
    Update,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "middle-earth")]
#[command(about = "Query the fellowship reference dataset")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML service configuration")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn load_service_config(&self) -> crate::Result<ServiceConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                ServiceConfig::from_file(path)
            }
            None => Ok(ServiceConfig::default()),
        }
    }
}
