//! Elementa - Periodic Table Mini-Game Library
//!
//! Pure game logic for element-learning mini-games: a multiple-choice
//! quiz, a sixty-second lightning round, element bingo, and numeric
//! property guessing. The crate owns the element catalog, question
//! generation, session state machines, scoring, and progress reporting;
//! rendering, input, and durable storage belong to the host.

pub mod catalog;
pub mod games;
pub mod progress;
pub mod scoring;

pub use catalog::{ElementCatalog, ElementFamily, ElementRecord, MatterState};
pub use games::ActiveGame;
pub use progress::{GameType, MemoryProgress, ProgressSink, SessionSummary};
