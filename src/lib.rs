//! Detective Quest: O Julgamento Final
//!
//! A mansion mystery text adventure. Walk the rooms of a fixed mansion,
//! collect the clues left behind, and accuse the culprit once you think
//! the evidence is strong enough.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Each room has at most two doors, left and right
//! - **Clues**: Found automatically and kept in alphabetical order
//! - **Suspects**: Every clue may point to someone
//! - **Judgement**: An accusation needs at least two clues against the accused
//!
//! # Architecture
//!
//! - `game` - Map, clue index, suspect directory, exploration and verdict
//! - `data` - World configuration and the canonical mansion
//! - `console` - Line-oriented front end
//! - `tui` - Terminal user interface with ratatui
//! - `cli` - Command line arguments

pub mod cli;
pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Entry location not found: {0}")]
    UnknownEntry(String),

    #[error("Location {parent} leads to unknown location {child}")]
    UnknownLocation { parent: String, child: String },

    #[error("Location defined more than once: {0}")]
    DuplicateLocation(String),

    #[error("Location can be entered from more than one place: {0}")]
    SharedLocation(String),

    #[error("Invalid world: {0}")]
    InvalidWorld(String),
}
