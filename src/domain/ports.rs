use crate::domain::model::{CharacterRef, Ring};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Read-oriented queries over a fixed dataset.
///
/// Handles are shared, so the trait is not `Send`. Name lookups skip a
/// character that a caller holds mutably borrowed rather than panicking.
#[async_trait(?Send)]
pub trait Catalog {
    fn fellowship(&self) -> Vec<CharacterRef>;
    fn orcs_with_hobbit_prisoners(&self) -> Vec<CharacterRef>;
    fn fellowship_character(&self, name: &str) -> Option<CharacterRef>;
    fn ring_bearers(&self) -> BTreeMap<Ring, CharacterRef>;

    /// Simulates a slow refresh. Reports `true` once finished.
    async fn update(&self) -> Result<bool>;
}
