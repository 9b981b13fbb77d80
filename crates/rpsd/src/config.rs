//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rpsd_rules::{Difficulty, RandomDealer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Choreography pauses, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct Timings {
    /// Pause before cards are dealt.
    pub start_round_ms: u64,
    /// Pause after the last card is judged, before the board clears.
    pub end_round_ms: u64,
    /// How long a medium card stays visible.
    pub medium_show_ms: u64,
    /// Pause between hiding a medium card and opening input.
    pub medium_after_hide_ms: u64,
    /// How long hard cards stay visible.
    pub hard_show_ms: u64,
    /// Pause between hiding hard cards and opening input.
    pub hard_after_hide_ms: u64,
    /// Pause before reopening input for the next card of a hard round.
    pub debounce_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            start_round_ms: 100,
            end_round_ms: 1000,
            medium_show_ms: 1000,
            medium_after_hide_ms: 500,
            hard_show_ms: 2000,
            hard_after_hide_ms: 500,
            debounce_ms: 250,
        }
    }
}

impl Timings {
    /// Pause before cards are dealt.
    pub fn start_round(&self) -> Duration {
        Duration::from_millis(self.start_round_ms)
    }

    /// Pause after the last judgment.
    pub fn end_round(&self) -> Duration {
        Duration::from_millis(self.end_round_ms)
    }

    /// Reveal and post-hide pauses for a difficulty, if it hides cards.
    pub fn reveal(&self, difficulty: Difficulty) -> Option<(Duration, Duration)> {
        match difficulty {
            Difficulty::Easy => None,
            Difficulty::Medium => Some((
                Duration::from_millis(self.medium_show_ms),
                Duration::from_millis(self.medium_after_hide_ms),
            )),
            Difficulty::Hard => Some((
                Duration::from_millis(self.hard_show_ms),
                Duration::from_millis(self.hard_after_hide_ms),
            )),
        }
    }

    /// Pause between cards of a multi-card round.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Choreography pauses.
    #[serde(default)]
    timings: Timings,

    /// Difficulty to use for every round instead of the win-derived one.
    #[serde(default)]
    pinned_difficulty: Option<String>,

    /// Seed for a reproducible card sequence.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, pinned = ?config.pinned_difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, using defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the timings.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the pinned difficulty when one is given.
    pub fn with_pinned_difficulty(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.pinned_difficulty = name;
        }
        self
    }

    /// The pinned difficulty, with unknown names falling back to easy.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.pinned_difficulty
            .as_deref()
            .map(Difficulty::parse_or_easy)
    }

    /// Dealer for this session, seeded when a seed is configured.
    pub fn dealer(&self) -> RandomDealer {
        match self.seed {
            Some(seed) => RandomDealer::seeded(seed),
            None => RandomDealer::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
