//! Difficulty levels derived from the win count.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Wins needed to reach [`Difficulty::Medium`].
pub const MEDIUM_WINS: u32 = 3;

/// Wins needed to reach [`Difficulty::Hard`].
pub const HARD_WINS: u32 = 8;

/// How a round is choreographed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// One card that stays visible.
    #[default]
    Easy,
    /// One card that is hidden before input opens.
    Medium,
    /// Three cards, all hidden before input opens.
    Hard,
}

impl Difficulty {
    /// Selects the difficulty for a cumulative win count.
    #[instrument(level = "debug")]
    pub fn from_wins(wins: u32) -> Self {
        if wins < MEDIUM_WINS {
            Difficulty::Easy
        } else if wins < HARD_WINS {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Number of cards dealt per round.
    pub fn card_count(self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Medium => 1,
            Difficulty::Hard => 3,
        }
    }

    /// Parses a difficulty name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDifficulty`] for unknown names.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse()
            .map_err(|_| DomainError::InvalidDifficulty(raw.to_string()))
    }

    /// Parses a configured difficulty, treating unknown names as a
    /// recoverable configuration fault that falls back to [`Difficulty::Easy`].
    #[instrument]
    pub fn parse_or_easy(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|error| {
            warn!(%error, "Unknown difficulty level, falling back to easy");
            Difficulty::Easy
        })
    }
}
