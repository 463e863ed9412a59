//! Lightning round data structures.
//!
//! A 60-second sprint of rapid true/false and multiple-choice prompts.
//! The question deck is heavily over-generated at start; the clock, not
//! the deck, ends the session.

use crate::games::Counters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wall-clock budget for one session.
pub const TIME_LIMIT_MS: u64 = 60_000;

/// Pre-game countdown, in seconds.
pub const COUNTDOWN_SECONDS: u32 = 3;

/// How long the post-answer feedback flash stays up.
pub const FEEDBACK_MS: u64 = 700;

/// Deck size generated at session start. Far more than a player can
/// answer in the time budget.
pub const DEFAULT_QUESTION_COUNT: usize = 100;

/// The seven lightning question shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightningKind {
    SymbolTrueFalse,
    IsMetal,
    IsGas,
    GroupTrueFalse,
    PeriodTrueFalse,
    SymbolMultipleChoice,
    FamilyTrueFalse,
}

impl LightningKind {
    pub const ALL: [LightningKind; 7] = [
        LightningKind::SymbolTrueFalse,
        LightningKind::IsMetal,
        LightningKind::IsGas,
        LightningKind::GroupTrueFalse,
        LightningKind::PeriodTrueFalse,
        LightningKind::SymbolMultipleChoice,
        LightningKind::FamilyTrueFalse,
    ];

    /// Base point value before the streak multiplier.
    pub fn base_points(&self) -> u32 {
        match self {
            Self::SymbolTrueFalse | Self::SymbolMultipleChoice => 10,
            Self::IsMetal | Self::IsGas => 15,
            Self::GroupTrueFalse | Self::PeriodTrueFalse => 20,
            Self::FamilyTrueFalse => 15,
        }
    }
}

/// Question payload: a claim to judge, or a choice to make.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightningPayload {
    TrueFalse { statement: String, truth: bool },
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        answer: String,
    },
}

/// A player response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightningAnswer {
    Bool(bool),
    Choice(usize),
}

/// One generated lightning question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightningQuestion {
    pub id: Uuid,
    pub kind: LightningKind,
    pub atomic_number: u32,
    pub payload: LightningPayload,
}

impl LightningQuestion {
    pub fn base_points(&self) -> u32 {
        self.kind.base_points()
    }

    /// Whether a response answers this question correctly. A response of
    /// the wrong shape (choice against a claim, or vice versa) is wrong.
    pub fn is_correct(&self, answer: &LightningAnswer) -> bool {
        match (&self.payload, answer) {
            (LightningPayload::TrueFalse { truth, .. }, LightningAnswer::Bool(b)) => truth == b,
            (
                LightningPayload::MultipleChoice {
                    options, answer: correct, ..
                },
                LightningAnswer::Choice(i),
            ) => options.get(*i) == Some(correct),
            _ => false,
        }
    }
}

/// Session phase. The countdown and feedback states are tick-driven, so
/// a single host timer advances the whole session.
#[derive(Debug, Clone, PartialEq)]
pub enum LightningPhase {
    Setup,
    /// Pre-game countdown, seconds remaining.
    Countdown(u32),
    Playing,
    /// Brief post-answer flash; the game clock keeps running.
    Feedback { correct: bool, remaining_ms: u64 },
    Completed,
}

/// Full lightning session state.
#[derive(Debug, Clone)]
pub struct LightningGame {
    pub phase: LightningPhase,
    pub questions: Vec<LightningQuestion>,
    pub cursor: usize,
    pub counters: Counters,
    /// Time left on the 60-second clock.
    pub remaining_ms: u64,
    /// Time spent in Playing and Feedback.
    pub elapsed_ms: u64,
    /// Sub-second accumulator for the countdown.
    pub countdown_carry_ms: u64,
}

impl LightningGame {
    pub fn new() -> Self {
        Self {
            phase: LightningPhase::Setup,
            questions: Vec::new(),
            cursor: 0,
            counters: Counters::new(),
            remaining_ms: TIME_LIMIT_MS,
            elapsed_ms: 0,
            countdown_carry_ms: 0,
        }
    }

    pub fn current_question(&self) -> Option<&LightningQuestion> {
        self.questions.get(self.cursor)
    }

    pub fn is_over(&self) -> bool {
        self.phase == LightningPhase::Completed
    }
}

impl Default for LightningGame {
    fn default() -> Self {
        Self::new()
    }
}
