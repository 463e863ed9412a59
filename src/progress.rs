//! Progress recording: finished-session summaries and per-element
//! correctness signals.
//!
//! The games treat the sink as fire-and-forget; durable storage belongs
//! to the host application, not to this crate. `MemoryProgress` is the
//! in-memory reference implementation used by tests and simple hosts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which mini-game produced a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Quiz,
    Lightning,
    Bingo,
    PropertyGuess,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::Quiz,
        GameType::Lightning,
        GameType::Bingo,
        GameType::PropertyGuess,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Lightning => "Lightning",
            Self::Bingo => "Bingo",
            Self::PropertyGuess => "Property Guess",
        }
    }
}

/// Final report of one play-through, handed to the progress sink when a
/// session completes or is abandoned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub game_type: GameType,
    /// Wall-clock play time in seconds, accumulated from tick events.
    pub duration_secs: f64,
    pub correct: u32,
    pub total: u32,
    pub score: u32,
    pub best_streak: u32,
    /// Average seconds per answered item (0 when nothing was answered).
    pub avg_response_secs: f64,
    /// False when the session was abandoned before its natural end.
    pub completed: bool,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build a summary from raw counters, deriving the average response
    /// time from elapsed milliseconds.
    pub fn from_counts(
        game_type: GameType,
        elapsed_ms: u64,
        correct: u32,
        total: u32,
        score: u32,
        best_streak: u32,
        completed: bool,
    ) -> Self {
        let avg_response_secs = if total > 0 {
            elapsed_ms as f64 / 1000.0 / total as f64
        } else {
            0.0
        };
        Self {
            game_type,
            duration_secs: elapsed_ms as f64 / 1000.0,
            correct,
            total,
            score,
            best_streak,
            avg_response_secs,
            completed,
            finished_at: Utc::now(),
        }
    }

    /// Fraction of items answered correctly, in 0.0..=1.0.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Receiver for finished sessions and per-element answer signals.
/// No return value and no failure channel back into the game logic.
pub trait ProgressSink {
    fn record_session(&mut self, summary: &SessionSummary);
    fn record_answer(&mut self, atomic_number: u32, correct: bool);
}

/// Running correct/attempt tally for one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    pub correct: u64,
    pub attempts: u64,
}

/// In-memory progress sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgress {
    pub sessions: Vec<SessionSummary>,
    pub answers: HashMap<u32, ElementTally>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self, atomic_number: u32) -> ElementTally {
        self.answers.get(&atomic_number).copied().unwrap_or_default()
    }
}

impl ProgressSink for MemoryProgress {
    fn record_session(&mut self, summary: &SessionSummary) {
        self.sessions.push(summary.clone());
    }

    fn record_answer(&mut self, atomic_number: u32, correct: bool) {
        let tally = self.answers.entry(atomic_number).or_default();
        tally.attempts += 1;
        if correct {
            tally.correct += 1;
        }
    }
}
