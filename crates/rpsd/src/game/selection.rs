//! One-shot hand selection channel guarded by the input gate.
//!
//! The orchestrator arms at most one pending request at a time and opens
//! the gate only while it waits. A selection is delivered only if the gate
//! is open and a request is pending; anything else is dropped, never queued.

use rpsd_rules::{DomainError, Hand};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, instrument, warn};

#[derive(Debug, Default)]
struct GateState {
    enabled: bool,
    pending: Option<oneshot::Sender<Hand>>,
}

fn lock(state: &Mutex<GateState>) -> MutexGuard<'_, GateState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Orchestrator side of the selection channel. Starts closed.
#[derive(Debug, Clone, Default)]
pub struct SelectionGate {
    state: Arc<Mutex<GateState>>,
}

impl SelectionGate {
    /// Creates a closed gate with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a collaborator-side sender.
    pub fn sender(&self) -> SelectionSender {
        SelectionSender {
            state: Arc::clone(&self.state),
        }
    }

    /// Opens or closes the gate.
    pub fn set_enabled(&self, enabled: bool) {
        lock(&self.state).enabled = enabled;
    }

    /// Whether selections are currently accepted.
    pub fn is_enabled(&self) -> bool {
        lock(&self.state).enabled
    }

    /// Whether a request is waiting for a hand.
    pub fn is_pending(&self) -> bool {
        lock(&self.state).pending.is_some()
    }

    /// Arms the single pending request and returns its receiver.
    #[instrument(skip(self))]
    pub fn arm(&self) -> oneshot::Receiver<Hand> {
        let (tx, rx) = oneshot::channel();
        if lock(&self.state).pending.replace(tx).is_some() {
            warn!("Replaced an unresolved selection request");
        }
        rx
    }
}

/// Collaborator side of the selection channel.
#[derive(Debug, Clone)]
pub struct SelectionSender {
    state: Arc<Mutex<GateState>>,
}

impl SelectionSender {
    /// Offers a hand to the pending request.
    ///
    /// Returns `true` only if the hand resolved a pending request.
    #[instrument(skip(self))]
    pub fn select(&self, hand: Hand) -> bool {
        let mut state = lock(&self.state);
        if !state.enabled {
            debug!(%hand, "Input disabled, selection ignored");
            return false;
        }
        match state.pending.take() {
            Some(tx) => tx.send(hand).is_ok(),
            None => {
                debug!(%hand, "No pending request, selection ignored");
                false
            }
        }
    }

    /// Parses and offers a raw hand.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidHand`] before touching the gate.
    pub fn select_raw(&self, raw: &str) -> Result<bool, DomainError> {
        Ok(self.select(Hand::parse(raw)?))
    }
}
