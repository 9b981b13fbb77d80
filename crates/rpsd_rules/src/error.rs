//! Domain validation errors.

/// A raw value fell outside its enum domain.
///
/// Raised at construction boundaries (card creation, player input, config)
/// and never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DomainError {
    /// Not one of `rock`, `paper` or `scissors`.
    #[display(
        "Invalid hand '{}'. Valid hands are: 'rock', 'paper', or 'scissors'.",
        _0
    )]
    InvalidHand(String),

    /// Not one of `win`, `lose` or `tie`.
    #[display(
        "Invalid directive '{}'. Valid directives are: 'win', 'lose', or 'tie'.",
        _0
    )]
    InvalidDirective(String),

    /// Not one of `easy`, `medium` or `hard`.
    #[display(
        "Invalid difficulty '{}'. Valid difficulties are: 'easy', 'medium', or 'hard'.",
        _0
    )]
    InvalidDifficulty(String),
}

impl std::error::Error for DomainError {}
