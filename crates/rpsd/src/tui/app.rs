//! Terminal view state, rebuilt from board and game events.

use rpsd::{BoardEvent, Card, Difficulty, GameEvent, Hand, Phase, ScoreState};
use tracing::debug;

/// What the terminal currently shows.
#[derive(Debug)]
pub struct App {
    cards: Vec<Card>,
    input_enabled: bool,
    score: ScoreState,
    phase: Phase,
    difficulty: Difficulty,
    status_message: String,
    show_help: bool,
}

impl App {
    /// Creates the initial view.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            input_enabled: false,
            score: ScoreState::new(),
            phase: Phase::Idle,
            difficulty: Difficulty::Easy,
            status_message: "Get ready...".to_string(),
            show_help: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Applies a board change.
    pub fn handle_board_event(&mut self, event: BoardEvent) {
        debug!(?event, "Board event");
        match event {
            BoardEvent::Presented { index, card } | BoardEvent::Refreshed { index, card } => {
                if index < self.cards.len() {
                    self.cards[index] = card;
                } else {
                    self.cards.push(card);
                }
            }
            BoardEvent::Cleared => self.cards.clear(),
            BoardEvent::InputEnabled(enabled) => self.input_enabled = enabled,
        }
    }

    /// Applies orchestrator progress.
    pub fn handle_game_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::PhaseChanged(phase) => {
                self.phase = phase;
                match phase {
                    Phase::Preparing(difficulty) => {
                        self.difficulty = difficulty;
                        self.status_message = format!("New {} round", difficulty);
                    }
                    Phase::Revealing => self.status_message = "Memorize the cards...".to_string(),
                    Phase::AwaitingInput(index) if self.cards.len() > 1 => {
                        self.status_message = format!("Your answer for card {}", index + 1);
                    }
                    Phase::AwaitingInput(_) => self.status_message = "Your answer?".to_string(),
                    _ => {}
                }
            }
            GameEvent::CardJudged { judgment, score } => {
                self.score = score;
                self.status_message = format!(
                    "You played {} against {} ({}): {}",
                    judgment.selected, judgment.card_hand, judgment.directive, judgment.correctness
                );
            }
            GameEvent::RoundComplete(summary) => self.score = summary.score,
        }
    }

    /// Records a hand key press.
    pub fn note_selection(&mut self, hand: Hand, accepted: bool) {
        if !accepted {
            self.status_message = format!("Not now - {} ignored", hand);
        }
    }
}
