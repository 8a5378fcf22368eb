pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use crate::core::{data_service::DataService, Catalog, Character, CharacterRef, Film, Race, Ring};
pub use utils::error::{DataError, Result};
pub use utils::validation::element_at;
