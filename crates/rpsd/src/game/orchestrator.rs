//! Round orchestration.
//!
//! One orchestrator drives one game on a single control path:
//!
//! ```text
//! Idle -> Preparing(difficulty) -> Revealing -> AwaitingInput(i) -> Judging(i)
//!                                                  ^                    |
//!                                                  +---- next card -----+
//!                                                                       |
//!                                      Preparing(next) <- RoundComplete <+
//! ```
//!
//! The orchestrator suspends only on clock pauses and on the pending
//! selection request, which has no timeout.

use super::{Board, Clock, Correctness, GameError, TokioClock};
use crate::config::{GameConfig, Timings};
use derive_new::new;
use rpsd_rules::{evaluate, matches, Dealer, Difficulty, Directive, Hand, Outcome, ScoreState};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Where the orchestrator is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started.
    Idle,
    /// Board cleared, difficulty chosen, cards being dealt.
    Preparing(Difficulty),
    /// Timed show/hide choreography.
    Revealing,
    /// Waiting for the player's hand for the card at this index.
    AwaitingInput(usize),
    /// Scoring the card at this index.
    Judging(usize),
    /// Every card of the round is judged.
    RoundComplete,
}

/// How one card was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Judgment {
    /// Position of the card on the board.
    pub index: usize,
    /// Hand the player chose.
    pub selected: Hand,
    /// Hand shown on the card.
    pub card_hand: Hand,
    /// Directive shown on the card.
    pub directive: Directive,
    /// Player's hand against the card's hand.
    pub outcome: Outcome,
    /// Whether the outcome met the directive.
    pub correctness: Correctness,
}

/// Result of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// One-based round number.
    pub round: u64,
    /// Difficulty the round was played at.
    pub difficulty: Difficulty,
    /// Judgments in card order.
    pub judgments: Vec<Judgment>,
    /// Score after the round.
    pub score: ScoreState,
}

/// Progress published to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The orchestrator entered a new phase.
    PhaseChanged(Phase),
    /// A card was judged and the score updated.
    CardJudged {
        /// The judgment.
        judgment: Judgment,
        /// Score right after the judgment.
        score: ScoreState,
    },
    /// A round finished.
    RoundComplete(RoundSummary),
}

/// Drives rounds: deal, reveal, wait for input, judge, repeat.
pub struct RoundOrchestrator<C: Clock = TokioClock> {
    board: Board,
    dealer: Box<dyn Dealer>,
    clock: C,
    timings: Timings,
    pinned: Option<Difficulty>,
    score: ScoreState,
    phase: Phase,
    rounds_completed: u64,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<C: Clock> RoundOrchestrator<C> {
    /// Creates an idle orchestrator with default timings and an empty score.
    pub fn new(
        board: Board,
        dealer: Box<dyn Dealer>,
        clock: C,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board,
            dealer,
            clock,
            timings: Timings::default(),
            pinned: None,
            score: ScoreState::new(),
            phase: Phase::Idle,
            rounds_completed: 0,
            event_tx,
        }
    }

    /// Applies timings and pinned difficulty from a config.
    pub fn configure(self, config: &GameConfig) -> Self {
        self.with_timings(*config.timings())
            .with_pinned_difficulty(config.difficulty())
    }

    /// Replaces the choreography timings.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Plays every round at `difficulty` instead of the win-derived one.
    pub fn with_pinned_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.pinned = difficulty;
        self
    }

    /// Resumes from an earlier score.
    pub fn with_score(mut self, score: ScoreState) -> Self {
        self.score = score;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score.
    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rounds finished so far.
    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    /// Starts the game and plays rounds until the task is dropped.
    ///
    /// # Errors
    ///
    /// Returns only on an unrecoverable [`GameError`].
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<(), GameError> {
        info!("Starting round orchestration");
        loop {
            let summary = self.play_round().await?;
            debug!(round = summary.round, "Looping to next round");
        }
    }

    /// Plays exactly one round.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the board loses its cards mid-round or the
    /// selection request is dropped.
    #[instrument(skip(self), fields(round = self.rounds_completed + 1))]
    pub async fn play_round(&mut self) -> Result<RoundSummary, GameError> {
        self.board.clear();
        self.board.set_input_enabled(false);
        let difficulty = self.current_difficulty();
        self.transition(Phase::Preparing(difficulty));

        self.clock.after(self.timings.start_round()).await;
        let count = difficulty.card_count();
        for _ in 0..count {
            let (hand, directive) = self.dealer.deal();
            self.board.add_card(hand, directive);
        }

        self.transition(Phase::Revealing);
        self.reveal(difficulty).await;

        let mut judgments = Vec::with_capacity(count);
        for index in 0..count {
            let selected = self.await_selection(index).await?;
            judgments.push(self.judge(index, selected)?);
            if index + 1 < count {
                self.board.advance();
                self.clock.after(self.timings.debounce()).await;
            }
        }

        self.rounds_completed += 1;
        self.transition(Phase::RoundComplete);
        let summary = RoundSummary {
            round: self.rounds_completed,
            difficulty,
            judgments,
            score: self.score,
        };
        info!(
            wins = self.score.wins(),
            losses = self.score.losses(),
            %difficulty,
            "Round complete"
        );
        self.emit(GameEvent::RoundComplete(summary.clone()));

        self.clock.after(self.timings.end_round()).await;
        Ok(summary)
    }

    fn current_difficulty(&self) -> Difficulty {
        self.pinned.unwrap_or_else(|| self.score.difficulty())
    }

    async fn reveal(&mut self, difficulty: Difficulty) {
        if let Some((show, after_hide)) = self.timings.reveal(difficulty) {
            self.board.show_all();
            self.clock.after(show).await;
            self.board.hide_all();
            self.clock.after(after_hide).await;
        }
    }

    async fn await_selection(&mut self, index: usize) -> Result<Hand, GameError> {
        let pending = self.board.arm_selection();
        self.board.set_input_enabled(true);
        self.transition(Phase::AwaitingInput(index));

        let hand = pending.await.map_err(|_| GameError::SelectionClosed)?;
        self.board.set_input_enabled(false);
        Ok(hand)
    }

    fn judge(&mut self, index: usize, selected: Hand) -> Result<Judgment, GameError> {
        self.transition(Phase::Judging(index));

        let card = self.board.current()?;
        let (card_hand, directive) = (card.hand(), card.directive());
        let outcome = evaluate(selected, card_hand);
        let correct = matches(outcome, directive);

        self.score.record(correct);
        let correctness = Correctness::from(correct);
        self.board.resolve_current(correctness)?;

        let judgment = Judgment::new(index, selected, card_hand, directive, outcome, correctness);
        info!(
            index,
            %selected,
            %card_hand,
            %directive,
            %outcome,
            %correctness,
            "Card judged"
        );
        self.emit(GameEvent::CardJudged {
            judgment,
            score: self.score,
        });
        Ok(judgment)
    }

    fn transition(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "Phase transition");
        self.phase = phase;
        self.emit(GameEvent::PhaseChanged(phase));
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Game event receiver dropped");
        }
    }
}
