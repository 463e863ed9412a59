//! Property-guess data structures.
//!
//! The player estimates a numeric property of an element on a slider;
//! accuracy is scored by percent error against the catalog value.

use crate::catalog::ElementRecord;
use crate::games::Counters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Questions per session.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Percent-error thresholds for a property kind. All kinds currently
/// share the same thresholds; they are carried per kind so a host can
/// display them next to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    pub excellent: f64,
    pub good: f64,
    pub ok: f64,
}

/// The seven guessable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    AtomicMass,
    MeltingPoint,
    BoilingPoint,
    Density,
    Electronegativity,
    AtomicRadius,
    IonizationEnergy,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 7] = [
        PropertyKind::AtomicMass,
        PropertyKind::MeltingPoint,
        PropertyKind::BoilingPoint,
        PropertyKind::Density,
        PropertyKind::Electronegativity,
        PropertyKind::AtomicRadius,
        PropertyKind::IonizationEnergy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AtomicMass => "Atomic Mass",
            Self::MeltingPoint => "Melting Point",
            Self::BoilingPoint => "Boiling Point",
            Self::Density => "Density",
            Self::Electronegativity => "Electronegativity",
            Self::AtomicRadius => "Atomic Radius",
            Self::IonizationEnergy => "Ionization Energy",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::AtomicMass => "u",
            Self::MeltingPoint | Self::BoilingPoint => "°C",
            Self::Density => "g/cm³",
            Self::Electronegativity => "",
            Self::AtomicRadius => "pm",
            Self::IonizationEnergy => "eV",
        }
    }

    /// Slider range for guess input. Validation only; scoring works on
    /// the raw percent error.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::AtomicMass => (1.0, 300.0),
            Self::MeltingPoint => (-273.0, 3_700.0),
            Self::BoilingPoint => (-273.0, 6_000.0),
            Self::Density => (0.0, 23.0),
            Self::Electronegativity => (0.0, 4.0),
            Self::AtomicRadius => (25.0, 350.0),
            Self::IonizationEnergy => (3.0, 25.0),
        }
    }

    /// Slider increment.
    pub fn step(&self) -> f64 {
        match self {
            Self::AtomicMass => 0.1,
            Self::MeltingPoint | Self::BoilingPoint => 10.0,
            Self::Density => 0.1,
            Self::Electronegativity => 0.05,
            Self::AtomicRadius => 5.0,
            Self::IonizationEnergy => 0.1,
        }
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            excellent: 0.05,
            good: 0.15,
            ok: 0.30,
        }
    }

    /// The catalog value of this property, when the element has one.
    pub fn value_of(&self, element: &ElementRecord) -> Option<f64> {
        match self {
            Self::AtomicMass => element.atomic_mass,
            Self::MeltingPoint => element.melting_point_c,
            Self::BoilingPoint => element.boiling_point_c,
            Self::Density => element.density_g_cm3,
            Self::Electronegativity => element.electronegativity,
            Self::AtomicRadius => element.atomic_radius_pm,
            Self::IonizationEnergy => element.ionization_energy_ev,
        }
    }

    /// Ground-truth stand-in for elements missing this property: the
    /// midpoint of the slider range.
    pub fn fallback(&self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }

    /// Clamp a raw guess into the slider range.
    pub fn clamp(&self, guess: f64) -> f64 {
        let (low, high) = self.bounds();
        guess.clamp(low, high)
    }
}

/// Qualitative band for one guess, from percent error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyTier {
    Excellent,
    Good,
    Ok,
    Fair,
    Poor,
}

impl AccuracyTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Ok => "OK",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// One generated guess prompt. `true_value` is resolved at generation
/// time so scoring never goes back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyQuestion {
    pub id: Uuid,
    pub atomic_number: u32,
    pub element_name: String,
    pub kind: PropertyKind,
    pub true_value: f64,
    pub guess: Option<f64>,
}

impl AccuracyQuestion {
    pub fn answered(&self) -> bool {
        self.guess.is_some()
    }
}

/// Session phase. Each guess pauses in `Reviewing` until the host calls
/// `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyPhase {
    Setup,
    Playing,
    Reviewing { score: u32, tier: AccuracyTier },
    Completed,
}

/// Full property-guess session state.
#[derive(Debug, Clone)]
pub struct PropertyGame {
    pub phase: PropertyPhase,
    pub questions: Vec<AccuracyQuestion>,
    pub cursor: usize,
    pub counters: Counters,
    pub elapsed_ms: u64,
}

impl PropertyGame {
    pub fn new() -> Self {
        Self {
            phase: PropertyPhase::Setup,
            questions: Vec::new(),
            cursor: 0,
            counters: Counters::new(),
            elapsed_ms: 0,
        }
    }

    pub fn current_question(&self) -> Option<&AccuracyQuestion> {
        self.questions.get(self.cursor)
    }
}

impl Default for PropertyGame {
    fn default() -> Self {
        Self::new()
    }
}
