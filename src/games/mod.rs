//! Mini-game sessions: Quiz, Lightning, Bingo, Property Guess.

pub mod bingo;
pub mod lightning;
pub mod property;
pub mod quiz;

pub use bingo::{BingoCard, BingoCell, BingoError, BingoGame, BingoPhase, WinPattern};
pub use lightning::{
    LightningAnswer, LightningGame, LightningKind, LightningPayload, LightningPhase,
    LightningQuestion,
};
pub use property::{AccuracyQuestion, AccuracyTier, PropertyGame, PropertyKind, PropertyPhase};
pub use quiz::{QuizDifficulty, QuizGame, QuizKind, QuizPhase, QuizQuestion};

use crate::progress::{GameType, ProgressSink, SessionSummary};
use crate::scoring::streak_scaled_points;

/// Running counters owned by one session. Streak resets to zero on an
/// incorrect answer; `best_streak` is the running maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub score: u32,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer with streak-scaled points. Returns the points
    /// awarded (zero for an incorrect answer).
    pub fn record(&mut self, correct: bool, base_points: u32) -> u32 {
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            let points = streak_scaled_points(base_points, self.streak);
            self.score += points;
            points
        } else {
            self.incorrect += 1;
            self.streak = 0;
            0
        }
    }

    /// Record an answer with a fixed point award (no streak multiplier).
    /// The points accumulate whether or not the answer counted as
    /// correct; correctness only drives the counts and the streak.
    pub fn record_flat(&mut self, correct: bool, points: u32) -> u32 {
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.incorrect += 1;
            self.streak = 0;
        }
        self.score += points;
        points
    }

    /// Total answered items.
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// The currently active game session. Only one is active at a time; the
/// host owns it and drives it with input and tick events.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Quiz(QuizGame),
    Lightning(LightningGame),
    Bingo(Box<BingoGame>),
    PropertyGuess(PropertyGame),
}

impl ActiveGame {
    pub fn game_type(&self) -> GameType {
        match self {
            Self::Quiz(_) => GameType::Quiz,
            Self::Lightning(_) => GameType::Lightning,
            Self::Bingo(_) => GameType::Bingo,
            Self::PropertyGuess(_) => GameType::PropertyGuess,
        }
    }

    /// Tear down the session mid-play: flushes a partial summary to the
    /// sink and leaves the session completed, so any timer callback that
    /// fires afterwards is a no-op.
    pub fn abandon<S: ProgressSink>(&mut self, sink: &mut S) -> Option<SessionSummary> {
        match self {
            Self::Quiz(game) => quiz::abandon(game, sink),
            Self::Lightning(game) => lightning::abandon(game, sink),
            Self::Bingo(game) => bingo::abandon(game, sink),
            Self::PropertyGuess(game) => property::abandon(game, sink),
        }
    }
}
