//! Cumulative score for a game session.

use crate::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins, losses and judged cards for the life of a session.
///
/// Counters only grow; `rounds_played` always equals `wins + losses`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    wins: u32,
    losses: u32,
    rounds_played: u32,
}

impl ScoreState {
    /// Creates an empty score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a score that resumes from an earlier record.
    pub fn from_record(wins: u32, losses: u32) -> Self {
        Self {
            wins,
            losses,
            rounds_played: wins.saturating_add(losses),
        }
    }

    /// Records one judged card.
    #[instrument(level = "debug")]
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
        self.rounds_played = self.rounds_played.saturating_add(1);
    }

    /// Correct answers so far.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Incorrect answers so far.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Cards judged so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Difficulty this score earns.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_wins(self.wins)
    }
}
