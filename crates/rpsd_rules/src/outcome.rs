//! Matchup adjudication.

use crate::{Directive, Hand};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The first hand won.
    Player1,
    /// The second hand won.
    Player2,
    /// Both hands were equal.
    Tie,
}

/// Compares two hands.
///
/// Equal hands tie; otherwise the first hand wins only when it beats the
/// second, and the second wins in every remaining case.
#[instrument(level = "trace")]
pub fn evaluate(first: Hand, second: Hand) -> Outcome {
    if first == second {
        Outcome::Tie
    } else if first.beats(second) {
        Outcome::Player1
    } else {
        Outcome::Player2
    }
}

/// Returns true if `outcome`, seen from the first player, satisfies `directive`.
#[instrument(level = "trace")]
pub fn matches(outcome: Outcome, directive: Directive) -> bool {
    matches!(
        (outcome, directive),
        (Outcome::Player1, Directive::Win)
            | (Outcome::Tie, Directive::Tie)
            | (Outcome::Player2, Directive::Lose)
    )
}

/// The only player hand that satisfies a card showing `card` and `directive`.
pub fn correct_answer(card: Hand, directive: Directive) -> Hand {
    match directive {
        Directive::Win => card.counter(),
        Directive::Lose => card.prey(),
        Directive::Tie => card,
    }
}
