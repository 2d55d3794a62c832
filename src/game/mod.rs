//! Core game logic
//!
//! The mansion map, the clue index, the suspect directory, the exploration
//! state machine and the final judgement.

pub mod clues;
pub mod exploration;
pub mod map;
pub mod narrative;
pub mod suspects;
pub mod verdict;

pub use clues::ClueIndex;
pub use exploration::{Command, ExplorationEngine, Notice, State};
pub use map::{Branch, LocationMap, LocationNode};
pub use suspects::SuspectDirectory;
pub use verdict::{Outcome, Verdict, CONVICTION_THRESHOLD};

use crate::data::WorldConfig;
use crate::GameError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which parts of the game are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Walk the mansion only; a room without exits ends the tour
    Tour,
    /// Walk and collect clues
    Collector,
    /// Collect clues, see who they point to, and accuse someone
    #[default]
    Trial,
}

impl Variant {
    pub fn collects_clues(&self) -> bool {
        !matches!(self, Variant::Tour)
    }

    pub fn resolves_suspects(&self) -> bool {
        matches!(self, Variant::Trial)
    }

    pub fn ends_at_dead_end(&self) -> bool {
        matches!(self, Variant::Tour)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Tour => write!(f, "tour"),
            Variant::Collector => write!(f, "collector"),
            Variant::Trial => write!(f, "trial"),
        }
    }
}

/// A built world, ready to be explored any number of times
#[derive(Debug)]
pub struct Game {
    pub title: String,
    pub map: LocationMap,
    pub directory: SuspectDirectory,
    suspects: Vec<String>,
}

impl Game {
    /// Build the map and the suspect directory from a world configuration
    pub fn new(world: &WorldConfig) -> Result<Self, GameError> {
        let map = LocationMap::build(world)?;
        let directory = SuspectDirectory::build(&world.suspects);
        tracing::info!(
            title = %world.title,
            locations = map.len(),
            links = directory.len(),
            "world ready"
        );

        Ok(Self {
            title: world.title.clone(),
            map,
            directory,
            suspects: world.suspect_names().into_iter().map(str::to_string).collect(),
        })
    }

    /// Start a fresh exploration at the entry
    pub fn explore(&self, variant: Variant) -> ExplorationEngine<'_> {
        ExplorationEngine::new(&self.map, &self.directory, variant)
    }

    /// Judge an accusation against the clues an exploration collected
    pub fn accuse(&self, clues: &ClueIndex, accused: &str) -> Verdict {
        verdict::evaluate(clues, &self.directory, accused.trim())
    }

    /// Everyone some clue can point to
    pub fn suspects(&self) -> &[String] {
        &self.suspects
    }
}

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Discovery,
    Warning,
    Success,
    Failure,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub message: String,
}

impl GameMessage {
    pub fn new(tone: Tone, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            message: message.to_string(),
        }
    }

    pub fn info(message: &str) -> Self {
        Self::new(Tone::Info, message)
    }
}
