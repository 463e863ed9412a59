//! Bingo data structures.
//!
//! A 5x5 card of distinct elements. The caller announces random
//! elements; the player marks called cells, and completed lines end the
//! game.

use crate::catalog::ElementCatalog;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Cards are always 5x5.
pub const CARD_SIZE: usize = 5;
pub const CARD_CELLS: usize = CARD_SIZE * CARD_SIZE;

/// A completed configuration on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WinPattern {
    /// Completed row, 0-4 top to bottom.
    Row(u8),
    /// Completed column, 0-4 left to right.
    Column(u8),
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
    /// All 25 cells marked.
    FullCard,
}

impl WinPattern {
    /// Point value of completing this pattern.
    pub fn points(&self) -> u32 {
        match self {
            Self::Row(_) | Self::Column(_) => 100,
            Self::DiagonalMain | Self::DiagonalAnti => 150,
            Self::FullCard => 500,
        }
    }
}

/// Card construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoError {
    /// The catalog has fewer elements than the card needs.
    InsufficientCatalog { required: usize, available: usize },
}

impl fmt::Display for BingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCatalog {
                required,
                available,
            } => write!(
                f,
                "bingo needs {} distinct elements, catalog has {}",
                required, available
            ),
        }
    }
}

impl std::error::Error for BingoError {}

/// One card cell. The element assignment never changes after
/// construction; only the flags do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCell {
    pub atomic_number: u32,
    /// The caller has announced this element.
    pub called: bool,
    /// The player has marked this cell.
    pub marked: bool,
}

/// A 5x5 card of 25 distinct elements, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingoCard {
    pub cells: Vec<BingoCell>,
}

impl BingoCard {
    /// Sample 25 distinct elements from the catalog. Requires a catalog
    /// of at least 25 elements.
    pub fn new<R: Rng>(catalog: &ElementCatalog, rng: &mut R) -> Result<Self, BingoError> {
        if catalog.len() < CARD_CELLS {
            return Err(BingoError::InsufficientCatalog {
                required: CARD_CELLS,
                available: catalog.len(),
            });
        }
        let cells = catalog
            .all()
            .choose_multiple(rng, CARD_CELLS)
            .map(|e| BingoCell {
                atomic_number: e.atomic_number,
                called: false,
                marked: false,
            })
            .collect();
        Ok(Self { cells })
    }

    pub fn index(row: usize, col: usize) -> usize {
        row * CARD_SIZE + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &BingoCell {
        &self.cells[Self::index(row, col)]
    }

    /// Position of the cell holding the given element, if it is on the
    /// card at all.
    pub fn find(&self, atomic_number: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.atomic_number == atomic_number)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }
}

/// Session phase. `Won` carries every pattern completed by the final
/// mark: a single mark can finish several lines at once.
#[derive(Debug, Clone, PartialEq)]
pub enum BingoPhase {
    Setup,
    Playing,
    Won(Vec<WinPattern>),
    Completed,
}

/// Full bingo session state.
#[derive(Debug, Clone)]
pub struct BingoGame {
    pub phase: BingoPhase,
    pub card: Option<BingoCard>,
    /// Every announced element, on-card or not, in call order.
    pub call_history: Vec<u32>,
    /// Patterns already scored.
    pub achieved: BTreeSet<WinPattern>,
    pub score: u32,
    pub elapsed_ms: u64,
}

impl BingoGame {
    pub fn new() -> Self {
        Self {
            phase: BingoPhase::Setup,
            card: None,
            call_history: Vec::new(),
            achieved: BTreeSet::new(),
            score: 0,
            elapsed_ms: 0,
        }
    }
}

impl Default for BingoGame {
    fn default() -> Self {
        Self::new()
    }
}
