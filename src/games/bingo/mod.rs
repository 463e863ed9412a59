//! Element bingo on a 5x5 card.
//!
//! A card of 25 distinct elements is dealt at start. Random elements are
//! called one at a time; the player marks called cells, and the first
//! completed line (or lines) wins the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
