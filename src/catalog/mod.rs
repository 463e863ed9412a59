//! Element catalog: the reference collection every game reads from.
//!
//! The catalog is ordered by atomic number and never mutated by game
//! logic. A built-in 118-element table is provided; hosts can also
//! construct a catalog from their own records (e.g. a localized subset).

mod data;
pub mod types;

pub use types::{ElementFamily, ElementRecord, MatterState};

use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered, read-only collection of element records.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
    elements: Vec<ElementRecord>,
}

impl ElementCatalog {
    /// Build a catalog from arbitrary records. Records are sorted by
    /// atomic number so positional access matches table order.
    pub fn new(mut elements: Vec<ElementRecord>) -> Self {
        elements.sort_by_key(|e| e.atomic_number);
        Self { elements }
    }

    /// The full built-in periodic table (118 elements).
    pub fn builtin() -> Self {
        Self::new(data::builtin_elements())
    }

    pub fn all(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by atomic number.
    pub fn by_number(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number)
            .ok()
            .map(|i| &self.elements[i])
    }

    /// A uniformly random element, or `None` on an empty catalog.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&ElementRecord> {
        self.elements.choose(rng)
    }
}
