//! Presentation seam between the board and whatever draws it.

use super::Card;
use tokio::sync::mpsc;
use tracing::debug;

/// Receives every visible change the board makes.
///
/// Implementors only display state; they never mutate cards or scores.
/// Hand selections flow back through [`SelectionSender`](super::SelectionSender).
pub trait RenderSink: Send + std::fmt::Debug {
    /// A new card was appended at `index`.
    fn present(&mut self, index: usize, card: &Card);

    /// The card at `index` changed (hidden, shown or judged).
    fn refresh(&mut self, index: usize, card: &Card);

    /// All presented cards were removed.
    fn clear(&mut self);

    /// Hand selection was enabled or disabled.
    fn set_input_enabled(&mut self, enabled: bool);
}

/// Board change, as published by [`ChannelSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A card was appended.
    Presented {
        /// Position on the board.
        index: usize,
        /// Card state at the time of the event.
        card: Card,
    },
    /// A card changed.
    Refreshed {
        /// Position on the board.
        index: usize,
        /// Card state at the time of the event.
        card: Card,
    },
    /// The board was emptied.
    Cleared,
    /// Input gating changed.
    InputEnabled(bool),
}

/// Render sink that forwards [`BoardEvent`]s over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<BoardEvent>,
}

impl ChannelSink {
    /// Wraps an existing sender.
    pub fn new(tx: mpsc::UnboundedSender<BoardEvent>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BoardEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: BoardEvent) {
        if self.tx.send(event).is_err() {
            debug!("Board event receiver dropped");
        }
    }
}

impl RenderSink for ChannelSink {
    fn present(&mut self, index: usize, card: &Card) {
        self.send(BoardEvent::Presented {
            index,
            card: card.clone(),
        });
    }

    fn refresh(&mut self, index: usize, card: &Card) {
        self.send(BoardEvent::Refreshed {
            index,
            card: card.clone(),
        });
    }

    fn clear(&mut self) {
        self.send(BoardEvent::Cleared);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.send(BoardEvent::InputEnabled(enabled));
    }
}
