//! The cards of the current round.

use super::{Card, Correctness, RenderSink, SelectionGate, SelectionSender};
use rpsd_rules::{Directive, Hand};
use tokio::sync::oneshot;
use tracing::{debug, instrument};

/// Board access outside the current card sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cursor does not point at a card.
    #[display("No card at index {} (board holds {})", index, len)]
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// Cards on the board.
        len: usize,
    },
}

impl std::error::Error for BoardError {}

/// Ordered cards for one round, a cursor, and the input channel.
///
/// Every change is mirrored to the [`RenderSink`]. The board is the only
/// path by which a player's hand reaches the orchestrator.
#[derive(Debug)]
pub struct Board {
    cards: Vec<Card>,
    cursor: usize,
    sink: Box<dyn RenderSink>,
    gate: SelectionGate,
}

impl Board {
    /// Creates an empty board with input disabled.
    pub fn new(sink: impl RenderSink + 'static) -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            sink: Box::new(sink),
            gate: SelectionGate::new(),
        }
    }

    /// Sender a front end uses to deliver hand selections.
    pub fn selection_sender(&self) -> SelectionSender {
        self.gate.sender()
    }

    /// Empties the board and resets the cursor.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cards.clear();
        self.cursor = 0;
        self.sink.clear();
    }

    /// Builds a revealed, unjudged card, appends it and presents it.
    /// Returns its index.
    #[instrument(skip(self))]
    pub fn add_card(&mut self, hand: Hand, directive: Directive) -> usize {
        let card = Card::from_parts(hand, directive);
        let index = self.cards.len();
        self.sink.present(index, &card);
        self.cards.push(card);
        index
    }

    /// Moves the cursor forward. Returns false at the last card.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 >= self.cards.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves the cursor back. Returns false at the first card.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// The card under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] when the board is empty.
    pub fn current(&self) -> Result<&Card, BoardError> {
        self.cards.get(self.cursor).ok_or(BoardError::OutOfBounds {
            index: self.cursor,
            len: self.cards.len(),
        })
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hides every card.
    #[instrument(skip(self))]
    pub fn hide_all(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.hide();
            self.sink.refresh(index, card);
        }
    }

    /// Shows every card.
    #[instrument(skip(self))]
    pub fn show_all(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.show();
            self.sink.refresh(index, card);
        }
    }

    /// Marks the current card, reveals it, and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] when the board is empty.
    #[instrument(skip(self))]
    pub fn resolve_current(&mut self, correctness: Correctness) -> Result<&Card, BoardError> {
        let index = self.cursor;
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, len })?;
        card.mark(correctness);
        card.show();
        self.sink.refresh(index, card);
        Ok(card)
    }

    /// Opens or closes hand selection.
    #[instrument(skip(self))]
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.gate.set_enabled(enabled);
        self.sink.set_input_enabled(enabled);
        debug!(enabled, "Input gate updated");
    }

    /// Whether hand selection is open.
    pub fn input_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Arms the single pending request for the next selected hand.
    pub(crate) fn arm_selection(&self) -> oneshot::Receiver<Hand> {
        self.gate.arm()
    }
}
