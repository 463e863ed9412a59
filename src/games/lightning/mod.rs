//! Sixty-second lightning round.
//!
//! Rapid-fire true/false and multiple-choice questions against a fixed
//! clock. Streaks scale the points; the clock keeps running through the
//! post-answer feedback flash.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
