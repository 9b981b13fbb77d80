//! Random generation of computer-controlled cards.

use crate::{Directive, Hand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Draws a uniformly random hand.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    Hand::ALL[rng.random_range(0..Hand::ALL.len())]
}

/// Draws a uniformly random directive.
pub fn random_directive<R: Rng + ?Sized>(rng: &mut R) -> Directive {
    Directive::ALL[rng.random_range(0..Directive::ALL.len())]
}

/// Source of the hand and directive for each new card.
pub trait Dealer: Send + std::fmt::Debug {
    /// Produces the next card's hand and directive.
    fn deal(&mut self) -> (Hand, Directive);
}

/// Deals independent uniform draws.
#[derive(Debug, Clone)]
pub struct RandomDealer {
    rng: StdRng,
}

impl RandomDealer {
    /// Creates a dealer seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible dealer.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer for RandomDealer {
    fn deal(&mut self) -> (Hand, Directive) {
        let card = (random_hand(&mut self.rng), random_directive(&mut self.rng));
        debug!(hand = %card.0, directive = %card.1, "Dealt random card");
        card
    }
}

/// Deals a fixed sequence of cards, then continues randomly.
///
/// Used to replay a known session and to drive deterministic scenarios.
#[derive(Debug, Clone)]
pub struct ScriptedDealer {
    script: VecDeque<(Hand, Directive)>,
    fallback: RandomDealer,
}

impl ScriptedDealer {
    /// Creates a dealer that plays `script` first.
    pub fn new(script: impl IntoIterator<Item = (Hand, Directive)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: RandomDealer::seeded(0),
        }
    }

    /// Cards left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Dealer for ScriptedDealer {
    fn deal(&mut self) -> (Hand, Directive) {
        match self.script.pop_front() {
            Some(card) => card,
            None => self.fallback.deal(),
        }
    }
}
