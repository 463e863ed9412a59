//! Numeric property guessing.
//!
//! The player estimates properties like density or melting point on a
//! slider; guesses are banded by percent error against the catalog
//! value, reviewed one at a time.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
