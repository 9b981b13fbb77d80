//! Rules for Rock Paper Scissors, but Different.
//!
//! A computer-controlled card shows a hand and a directive (win, lose or
//! tie). The player answers with a hand of their own and is scored correct
//! when the real matchup against the card's hand satisfies the directive.
//!
//! This crate holds the pure pieces of the game:
//!
//! - **Domain**: [`Hand`], [`Directive`], [`Outcome`]
//! - **Adjudication**: [`evaluate`], [`matches`], [`correct_answer`]
//! - **Progression**: [`ScoreState`], [`Difficulty`]
//! - **Generation**: [`random_hand`], [`random_directive`] and the [`Dealer`] seam
//!
//! # Example
//!
//! ```
//! use rpsd_rules::{evaluate, matches, Directive, Hand, Outcome};
//!
//! let outcome = evaluate(Hand::Scissors, Hand::Rock);
//! assert_eq!(outcome, Outcome::Player2);
//! assert!(!matches(outcome, Directive::Win));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dealer;
mod difficulty;
mod directive;
mod error;
mod hand;
mod outcome;
mod score;

pub use dealer::{random_directive, random_hand, Dealer, RandomDealer, ScriptedDealer};
pub use difficulty::{Difficulty, HARD_WINS, MEDIUM_WINS};
pub use directive::Directive;
pub use error::DomainError;
pub use hand::Hand;
pub use outcome::{correct_answer, evaluate, matches, Outcome};
pub use score::ScoreState;
