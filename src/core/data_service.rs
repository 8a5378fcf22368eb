use crate::config::toml_config::{ServiceConfig, DEFAULT_UPDATE_DELAY_MS};
use crate::core::{Catalog, CharacterRef};
use crate::domain::model::{Character, Film, Race, Ring};
use crate::utils::error::{DataError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

/// Owns the fixed cast and films. Every instance is rebuilt from literals.
pub struct DataService {
    frodo: CharacterRef,
    sam: CharacterRef,
    merry: CharacterRef,
    pippin: CharacterRef,
    gandalf: CharacterRef,
    gimli: CharacterRef,
    legolas: CharacterRef,
    aragorn: CharacterRef,
    boromir: CharacterRef,
    sauron: CharacterRef,
    galadriel: CharacterRef,
    elrond: CharacterRef,
    guruk: CharacterRef,
    films: [Film; 3],
    update_delay: Duration,
}

impl DataService {
    pub fn new() -> Self {
        Self::build(Duration::from_millis(DEFAULT_UPDATE_DELAY_MS))
    }

    /// Rejects configurations that fail validation, so `update` always
    /// finishes within its three second bound.
    pub fn with_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config.update_delay()))
    }

    fn build(update_delay: Duration) -> Self {
        let now = Utc::now();
        let service = Self {
            frodo: Character::new("Frodo", 33, Race::Hobbit).into_ref(),
            sam: Character::new("Sam", 38, Race::Hobbit).into_ref(),
            merry: Character::new("Merry", 36, Race::Hobbit).into_ref(),
            pippin: Character::new("Pippin", 28, Race::Hobbit).into_ref(),
            gandalf: Character::new("Gandalf", 2020, Race::Maia).into_ref(),
            gimli: Character::new("Gimli", 139, Race::Dwarf).into_ref(),
            legolas: Character::new("Legolas", 1000, Race::Elf).into_ref(),
            aragorn: Character::new("Aragorn", 87, Race::Man).into_ref(),
            boromir: Character::new("Boromir", 37, Race::Man).into_ref(),
            sauron: Character::new("Sauron", 50000, Race::Maia).into_ref(),
            galadriel: Character::new("Galadriel", 3000, Race::Elf).into_ref(),
            elrond: Character::new("Elrond", 3000, Race::Elf).into_ref(),
            guruk: Character::new("Guruk", 20, Race::Orc).into_ref(),
            films: [
                Film::new("the fellowship of the Ring", now, "178 min"),
                Film::new("the two Towers", now, "179 min"),
                Film::new("the Return of the King", now, "201 min"),
            ],
            update_delay,
        };

        tracing::debug!(
            "Built dataset with {} characters and {} films",
            service.characters().len(),
            service.films.len()
        );
        service
    }

    /// All characters in declaration order.
    pub fn characters(&self) -> Vec<CharacterRef> {
        [
            &self.frodo,
            &self.sam,
            &self.merry,
            &self.pippin,
            &self.gandalf,
            &self.gimli,
            &self.legolas,
            &self.aragorn,
            &self.boromir,
            &self.sauron,
            &self.galadriel,
            &self.elrond,
            &self.guruk,
        ]
        .into_iter()
        .cloned()
        .collect()
    }

    pub fn character(&self, name: &str) -> Option<CharacterRef> {
        find_by_name(self.characters(), name)
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn members_of_race(&self, race: Race) -> Vec<CharacterRef> {
        self.fellowship()
            .into_iter()
            .filter(|member| {
                member
                    .try_borrow()
                    .map(|member| member.race() == race)
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn update_delay(&self) -> Duration {
        self.update_delay
    }

    /// Like [`Catalog::update`], but returns `Cancelled` if `cancel`
    /// resolves before the delay has elapsed.
    pub async fn update_until<F>(&self, cancel: F) -> Result<bool>
    where
        F: Future<Output = ()>,
    {
        tracing::info!("Starting update ({:?})", self.update_delay);
        tokio::select! {
            biased;
            _ = cancel => {
                tracing::warn!("Update cancelled");
                Err(DataError::Cancelled)
            }
            _ = tokio::time::sleep(self.update_delay) => {
                tracing::info!("Update finished");
                Ok(true)
            }
        }
    }
}

impl Default for DataService {
    fn default() -> Self {
        Self::new()
    }
}

/// Members currently borrowed mutably by a caller are skipped.
fn find_by_name(characters: Vec<CharacterRef>, name: &str) -> Option<CharacterRef> {
    let found = characters.into_iter().find(|character| {
        character
            .try_borrow()
            .map(|character| character.name() == name)
            .unwrap_or(false)
    });
    if found.is_none() {
        tracing::debug!("No character named {:?}", name);
    }
    found
}

#[async_trait(?Send)]
impl Catalog for DataService {
    fn fellowship(&self) -> Vec<CharacterRef> {
        vec![
            self.frodo.clone(),
            self.sam.clone(),
            self.merry.clone(),
            self.pippin.clone(),
            self.gandalf.clone(),
            self.legolas.clone(),
            self.gimli.clone(),
            self.aragorn.clone(),
            self.boromir.clone(),
        ]
    }

    fn orcs_with_hobbit_prisoners(&self) -> Vec<CharacterRef> {
        vec![self.guruk.clone(), self.merry.clone(), self.pippin.clone()]
    }

    fn fellowship_character(&self, name: &str) -> Option<CharacterRef> {
        find_by_name(self.fellowship(), name)
    }

    fn ring_bearers(&self) -> BTreeMap<Ring, CharacterRef> {
        BTreeMap::from([
            (Ring::Nenya, self.galadriel.clone()),
            (Ring::Narya, self.gandalf.clone()),
            (Ring::Vilya, self.elrond.clone()),
            (Ring::OneRing, self.frodo.clone()),
        ])
    }

    async fn update(&self) -> Result<bool> {
        self.update_until(std::future::pending()).await
    }
}
