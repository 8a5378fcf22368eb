pub mod data_service;

pub use crate::domain::model::{Character, CharacterRef, Film, Race, Ring};
pub use crate::domain::ports::Catalog;
pub use crate::utils::error::Result;
