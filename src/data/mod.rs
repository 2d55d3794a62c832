//! World data for the mansion
//!
//! Defines the world configuration a run is built from: the shape of the
//! location tree, the clue found in each room, and which suspect each clue
//! points to. The game core never embeds this content; it is always handed
//! a `WorldConfig`.

pub mod mansion;

use crate::GameError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete world: locations, entry point and clue/suspect associations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Shown in the banner
    pub title: String,

    /// Name of the location where every run starts
    pub entry: String,

    /// Every location of the map, in any order
    pub locations: Vec<LocationSpec>,

    /// Clue -> suspect pairs, in insertion order
    #[serde(default)]
    pub suspects: Vec<ClueLink>,
}

/// One room and its wiring, referencing children by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

impl LocationSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    pub fn clue(mut self, clue: &str) -> Self {
        self.clue = Some(clue.to_string());
        self
    }

    pub fn left(mut self, name: &str) -> Self {
        self.left = Some(name.to_string());
        self
    }

    pub fn right(mut self, name: &str) -> Self {
        self.right = Some(name.to_string());
        self
    }
}

/// Associates a clue text with the suspect it incriminates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLink {
    pub clue: String,
    pub suspect: String,
}

impl ClueLink {
    pub fn new(clue: &str, suspect: &str) -> Self {
        Self {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        }
    }
}

impl WorldConfig {
    /// The canonical mansion every run uses unless a world file is given
    pub fn mansion() -> Self {
        mansion::world()
    }

    /// Parse a world from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidWorld(e.to_string()))
    }

    /// Load a world file from disk
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read world file {}", path.display()))?;
        let world = Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse world file {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            locations = world.locations.len(),
            suspects = world.suspects.len(),
            "world file loaded"
        );
        Ok(world)
    }

    /// Find a location spec by name
    pub fn location(&self, name: &str) -> Option<&LocationSpec> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Distinct suspect names, in first-mention order
    pub fn suspect_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for link in &self.suspects {
            if !names.contains(&link.suspect.as_str()) {
                names.push(&link.suspect);
            }
        }
        names
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::mansion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_world_json() {
        let json = r#"{
            "title": "Casebre",
            "entry": "Porta",
            "locations": [
                { "name": "Porta", "clue": "Lama no tapete.", "left": "Quarto" },
                { "name": "Quarto" }
            ],
            "suspects": [ { "clue": "Lama no tapete.", "suspect": "Jardineiro" } ]
        }"#;

        let world = WorldConfig::from_json_str(json).unwrap();
        assert_eq!(world.entry, "Porta");
        assert_eq!(world.locations.len(), 2);
        assert_eq!(world.location("Porta").unwrap().left.as_deref(), Some("Quarto"));
        assert_eq!(world.location("Quarto").unwrap().clue, None);
        assert_eq!(world.suspects[0].suspect, "Jardineiro");
    }

    #[test]
    fn suspects_default_to_empty() {
        let json = r#"{ "title": "t", "entry": "a", "locations": [ { "name": "a" } ] }"#;
        let world = WorldConfig::from_json_str(json).unwrap();
        assert!(world.suspects.is_empty());
    }

    #[test]
    fn malformed_json_is_an_invalid_world() {
        let err = WorldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GameError::InvalidWorld(_)));
    }

    #[test]
    fn suspect_names_are_distinct() {
        let world = WorldConfig::mansion();
        let names = world.suspect_names();
        assert_eq!(names, vec!["Sr. Black", "Sra. White", "Coronel Mustard", "Prof. Plum"]);
    }
}
