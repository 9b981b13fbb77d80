//! A single card: one hand, one directive, one judgment.

use rpsd_rules::{Directive, DomainError, Hand};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Judgment applied to a card once the player has answered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Correctness {
    /// The answer satisfied the directive.
    Correct,
    /// The answer did not satisfy the directive.
    Incorrect,
}

impl From<bool> for Correctness {
    fn from(correct: bool) -> Self {
        if correct {
            Correctness::Correct
        } else {
            Correctness::Incorrect
        }
    }
}

/// One round's unit of play.
///
/// Cards start revealed. The orchestrator hides and shows them during the
/// reveal choreography and marks them after judging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    hand: Hand,
    directive: Directive,
    revealed: bool,
    correctness: Option<Correctness>,
}

impl Card {
    /// Builds a card from raw strings, rejecting values outside either domain.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] of the first invalid argument.
    #[instrument]
    pub fn new(hand: &str, directive: &str) -> Result<Self, DomainError> {
        Ok(Self::from_parts(Hand::parse(hand)?, Directive::parse(directive)?))
    }

    /// Builds a card from already-validated parts.
    pub fn from_parts(hand: Hand, directive: Directive) -> Self {
        Self {
            hand,
            directive,
            revealed: true,
            correctness: None,
        }
    }

    /// The computer's hand.
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// The goal the player must meet.
    pub fn directive(&self) -> Directive {
        self.directive
    }

    /// Whether the card face is currently visible.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The judgment, once the card has been answered.
    pub fn correctness(&self) -> Option<Correctness> {
        self.correctness
    }

    /// Hides the card face.
    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Shows the card face.
    pub fn show(&mut self) {
        self.revealed = true;
    }

    /// Marks the card as answered correctly.
    pub fn mark_correct(&mut self) {
        self.correctness = Some(Correctness::Correct);
    }

    /// Marks the card as answered incorrectly.
    pub fn mark_incorrect(&mut self) {
        self.correctness = Some(Correctness::Incorrect);
    }

    /// Applies a judgment; a later call replaces an earlier one.
    pub fn mark(&mut self, correctness: Correctness) {
        match correctness {
            Correctness::Correct => self.mark_correct(),
            Correctness::Incorrect => self.mark_incorrect(),
        }
    }
}
