//! Final judgement
//!
//! Tallies how many collected clues point at the accused and decides whether
//! the accusation holds.

use super::clues::ClueIndex;
use super::suspects::SuspectDirectory;
use serde::{Deserialize, Serialize};

/// Clues needed against a suspect to confirm the accusation
pub const CONVICTION_THRESHOLD: usize = 2;

/// How the accusation was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Confirmed,
    Rejected,
}

/// Result of accusing a suspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub accused: String,
    pub count: usize,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn is_confirmed(&self) -> bool {
        self.outcome == Outcome::Confirmed
    }
}

/// Number of collected clues whose suspect is exactly `accused`
pub fn count_for_suspect(index: &ClueIndex, directory: &SuspectDirectory, accused: &str) -> usize {
    index
        .iter()
        .filter(|clue| directory.lookup(clue) == Some(accused))
        .count()
}

pub fn evaluate(index: &ClueIndex, directory: &SuspectDirectory, accused: &str) -> Verdict {
    let count = count_for_suspect(index, directory, accused);
    let outcome = if count >= CONVICTION_THRESHOLD {
        Outcome::Confirmed
    } else {
        Outcome::Rejected
    };
    tracing::info!(accused, count, ?outcome, "accusation judged");

    Verdict {
        accused: accused.to_string(),
        count,
        outcome,
    }
}
