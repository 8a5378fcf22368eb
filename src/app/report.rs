use crate::domain::model::{Character, CharacterRef, Film, Ring};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Text,
    Json,
}

/// Copies the current values out of shared handles.
pub fn snapshot(characters: &[CharacterRef]) -> Vec<Character> {
    characters.iter().map(|c| c.borrow().clone()).collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_characters(characters: &[CharacterRef], format: OutputFormat) -> Result<String> {
    let characters = snapshot(characters);
    match format {
        OutputFormat::Json => to_json(&characters),
        OutputFormat::Text => Ok(characters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_ring_bearers(
    bearers: &BTreeMap<Ring, CharacterRef>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let bearers: BTreeMap<Ring, Character> = bearers
                .iter()
                .map(|(ring, bearer)| (*ring, bearer.borrow().clone()))
                .collect();
            to_json(&bearers)
        }
        OutputFormat::Text => Ok(bearers
            .iter()
            .map(|(ring, bearer)| format!("{}: {}", ring, bearer.borrow()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_films(films: &[Film], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(films),
        OutputFormat::Text => Ok(films
            .iter()
            .map(|film| {
                format!(
                    "{}, released {}",
                    film,
                    film.release_date().format("%Y-%m-%d")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
