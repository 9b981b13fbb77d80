//! Round engine: cards, the board, and the orchestrator that drives them.

mod board;
mod card;
mod clock;
mod error;
mod orchestrator;
mod render;
mod selection;

pub use board::{Board, BoardError};
pub use card::{Card, Correctness};
pub use clock::{Clock, TokioClock};
pub use error::GameError;
pub use orchestrator::{GameEvent, Judgment, Phase, RoundOrchestrator, RoundSummary};
pub use render::{BoardEvent, ChannelSink, RenderSink};
pub use selection::{SelectionGate, SelectionSender};
