//! Directives printed on each card.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The goal a card sets for the player's matchup against its hand.
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
pub enum Directive {
    /// The player must beat the card's hand.
    Win,
    /// The player must lose to the card's hand.
    Lose,
    /// The player must match the card's hand.
    Tie,
}

impl Directive {
    /// Every valid directive, in canonical order.
    pub const ALL: [Directive; 3] = [Directive::Win, Directive::Lose, Directive::Tie];

    /// Parses a directive from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDirective`] for anything outside the domain.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse()
            .map_err(|_| DomainError::InvalidDirective(raw.to_string()))
    }
}
