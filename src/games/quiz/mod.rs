//! Multiple-choice quiz over the element catalog.
//!
//! Questions are generated up front from the difficulty's allowed kinds;
//! the player navigates freely and can revise earlier answers until the
//! session is finished.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
