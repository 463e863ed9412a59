//! Quiz data structures.
//!
//! A multiple-choice quiz over the element catalog. The player can move
//! back and forth between questions and change earlier answers before
//! finishing the session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tiers. Each tier allows a subset of the question kinds;
/// Mixed allows all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl QuizDifficulty {
    pub const ALL: [QuizDifficulty; 4] = [
        QuizDifficulty::Easy,
        QuizDifficulty::Medium,
        QuizDifficulty::Hard,
        QuizDifficulty::Mixed,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(QuizDifficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Mixed => "Mixed",
        }
    }

    /// The question kinds this tier draws from.
    pub fn allowed_kinds(&self) -> &'static [QuizKind] {
        match self {
            Self::Easy => &[
                QuizKind::SymbolFromName,
                QuizKind::NameFromSymbol,
                QuizKind::StateFromName,
            ],
            Self::Medium => &[
                QuizKind::FamilyFromName,
                QuizKind::PeriodFromName,
                QuizKind::AtomicNumberFromName,
                QuizKind::NameFromAtomicNumber,
            ],
            Self::Hard => &[
                QuizKind::GroupFromName,
                QuizKind::PeriodFromName,
                QuizKind::AtomicNumberFromName,
                QuizKind::NameFromAtomicNumber,
            ],
            Self::Mixed => &QuizKind::ALL,
        }
    }
}

/// The eight question shapes the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizKind {
    SymbolFromName,
    NameFromSymbol,
    FamilyFromName,
    StateFromName,
    PeriodFromName,
    GroupFromName,
    AtomicNumberFromName,
    NameFromAtomicNumber,
}

impl QuizKind {
    pub const ALL: [QuizKind; 8] = [
        QuizKind::SymbolFromName,
        QuizKind::NameFromSymbol,
        QuizKind::FamilyFromName,
        QuizKind::StateFromName,
        QuizKind::PeriodFromName,
        QuizKind::GroupFromName,
        QuizKind::AtomicNumberFromName,
        QuizKind::NameFromAtomicNumber,
    ];
}

/// One generated multiple-choice question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub kind: QuizKind,
    /// The element this question is about.
    pub atomic_number: u32,
    pub prompt: String,
    /// Shuffled answer options (correct answer included).
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    /// Position of the correct answer within the shuffled options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        self.options.get(option_index) == Some(&self.answer)
    }
}

/// Session phase. Quiz has no per-question feedback state: review
/// happens inline and answers stay editable until the session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Setup,
    Playing,
    Completed,
}

/// Full quiz session state.
#[derive(Debug, Clone)]
pub struct QuizGame {
    pub difficulty: QuizDifficulty,
    pub phase: QuizPhase,
    pub questions: Vec<QuizQuestion>,
    /// Chosen option index per question, parallel to `questions`.
    pub selections: Vec<Option<usize>>,
    pub cursor: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub elapsed_ms: u64,
}

impl QuizGame {
    pub fn new(difficulty: QuizDifficulty) -> Self {
        Self {
            difficulty,
            phase: QuizPhase::Setup,
            questions: Vec::new(),
            selections: Vec::new(),
            cursor: 0,
            correct: 0,
            incorrect: 0,
            elapsed_ms: 0,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.cursor)
    }

    /// The selection for the current question, if any.
    pub fn current_selection(&self) -> Option<usize> {
        self.selections.get(self.cursor).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    pub fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.answered_count() == self.questions.len()
    }
}
