//! The three hands.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A rock-paper-scissors hand.
///
/// Displays and parses in lowercase canonical form; parsing ignores ASCII
/// case so `"Rock"` and `"ROCK"` are both accepted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Hand {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Hand {
    /// Every valid hand, in canonical order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Parses a hand from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidHand`] for anything outside the domain.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse()
            .map_err(|_| DomainError::InvalidHand(raw.to_string()))
    }

    /// The hand this one beats.
    pub fn prey(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// The hand that beats this one.
    pub fn counter(self) -> Hand {
        match self {
            Hand::Rock => Hand::Paper,
            Hand::Paper => Hand::Scissors,
            Hand::Scissors => Hand::Rock,
        }
    }

    /// Returns true if this hand beats `other`.
    pub fn beats(self, other: Hand) -> bool {
        self.prey() == other
    }
}
