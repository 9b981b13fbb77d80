//! Errors that end a round.

use super::BoardError;
use rpsd_rules::DomainError;

/// A fault the orchestrator cannot recover from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Bad hand or directive data reached the engine.
    #[display("{}", _0)]
    Domain(DomainError),

    /// The board was read outside its cards.
    #[display("{}", _0)]
    Board(BoardError),

    /// The pending selection request was dropped without an answer.
    #[display("Selection request dropped before a hand arrived")]
    #[from(skip)]
    SelectionClosed,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Domain(e) => Some(e),
            GameError::Board(e) => Some(e),
            GameError::SelectionClosed => None,
        }
    }
}
