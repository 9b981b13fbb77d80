//! Rock Paper Scissors, but Different - round engine.
//!
//! Each round deals one or three cards, runs a timed reveal/hide
//! choreography, then waits for one player hand per card and scores it
//! against the card's directive. Difficulty rises with the win count.
//!
//! # Architecture
//!
//! - **Board**: cards of the current round, the cursor, and the input gate
//! - **RenderSink**: presentation seam the board reports every change to
//! - **SelectionSender**: the only way a front end delivers a hand
//! - **RoundOrchestrator**: the phase machine that drives everything
//!
//! # Example
//!
//! ```no_run
//! use rpsd::{Board, ChannelSink, RandomDealer, RoundOrchestrator, TokioClock};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), rpsd::GameError> {
//! let (sink, _board_events) = ChannelSink::channel();
//! let board = Board::new(sink);
//! let selections = board.selection_sender();
//! let (event_tx, _game_events) = mpsc::unbounded_channel();
//!
//! let mut game = RoundOrchestrator::new(board, Box::new(RandomDealer::new()), TokioClock, event_tx);
//! tokio::spawn(async move { game.run().await });
//! selections.select(rpsd::Hand::Rock);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Timings};

// Crate-level exports - Round engine
pub use game::{
    Board, BoardError, BoardEvent, Card, ChannelSink, Clock, Correctness, GameError, GameEvent,
    Judgment, Phase, RenderSink, RoundOrchestrator, RoundSummary, SelectionGate, SelectionSender,
    TokioClock,
};

// Crate-level exports - Rules
pub use rpsd_rules::{
    correct_answer, evaluate, matches, random_directive, random_hand, Dealer, Difficulty,
    Directive, DomainError, Hand, Outcome, RandomDealer, ScoreState, ScriptedDealer,
};
