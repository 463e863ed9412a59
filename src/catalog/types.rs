//! Element catalog data structures.
//!
//! An `ElementRecord` is an immutable description of one chemical element.
//! The atomic number is the stable identity key; everything else is
//! descriptive and read-only to the game logic.

use serde::{Deserialize, Serialize};

/// The ten chemical families used for classification questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementFamily {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl ElementFamily {
    pub const ALL: [ElementFamily; 10] = [
        ElementFamily::AlkaliMetal,
        ElementFamily::AlkalineEarthMetal,
        ElementFamily::TransitionMetal,
        ElementFamily::PostTransitionMetal,
        ElementFamily::Metalloid,
        ElementFamily::ReactiveNonmetal,
        ElementFamily::Halogen,
        ElementFamily::NobleGas,
        ElementFamily::Lanthanide,
        ElementFamily::Actinide,
    ];

    /// Display name for prompts and answer options.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth Metal",
            Self::TransitionMetal => "Transition Metal",
            Self::PostTransitionMetal => "Post-Transition Metal",
            Self::Metalloid => "Metalloid",
            Self::ReactiveNonmetal => "Reactive Nonmetal",
            Self::Halogen => "Halogen",
            Self::NobleGas => "Noble Gas",
            Self::Lanthanide => "Lanthanide",
            Self::Actinide => "Actinide",
        }
    }

    /// Whether elements of this family are metals. Drives the lightning
    /// "is a metal" question.
    pub fn is_metal(&self) -> bool {
        match self {
            Self::AlkaliMetal
            | Self::AlkalineEarthMetal
            | Self::TransitionMetal
            | Self::PostTransitionMetal
            | Self::Lanthanide
            | Self::Actinide => true,
            Self::Metalloid | Self::ReactiveNonmetal | Self::Halogen | Self::NobleGas => false,
        }
    }
}

/// State of matter at room conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatterState {
    Solid,
    Liquid,
    Gas,
}

impl MatterState {
    pub const ALL: [MatterState; 3] = [MatterState::Solid, MatterState::Liquid, MatterState::Gas];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Liquid => "Liquid",
            Self::Gas => "Gas",
        }
    }
}

/// One chemical element. Physical properties are optional: not every
/// element has a measured value for every property, and the games carry
/// a documented fallback instead of crashing on the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Identity key, 1-118.
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub family: ElementFamily,
    /// Period 1-7.
    pub period: u8,
    /// Group 1-18. `None` for lanthanides and actinides.
    pub group: Option<u8>,
    pub state: MatterState,
    /// Atomic mass in u.
    pub atomic_mass: Option<f64>,
    /// Melting point in degrees Celsius.
    pub melting_point_c: Option<f64>,
    /// Boiling point in degrees Celsius.
    pub boiling_point_c: Option<f64>,
    /// Density in g/cm3.
    pub density_g_cm3: Option<f64>,
    /// Pauling electronegativity.
    pub electronegativity: Option<f64>,
    /// Covalent atomic radius in pm.
    pub atomic_radius_pm: Option<f64>,
    /// First ionization energy in eV.
    pub ionization_energy_ev: Option<f64>,
}

impl ElementRecord {
    pub fn is_metal(&self) -> bool {
        self.family.is_metal()
    }

    pub fn is_gas(&self) -> bool {
        self.state == MatterState::Gas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_all_has_ten_variants() {
        assert_eq!(ElementFamily::ALL.len(), 10);
    }

    #[test]
    fn test_family_names_are_distinct() {
        let mut names: Vec<&str> = ElementFamily::ALL.iter().map(|f| f.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_family_metal_split() {
        assert!(ElementFamily::AlkaliMetal.is_metal());
        assert!(ElementFamily::TransitionMetal.is_metal());
        assert!(ElementFamily::Lanthanide.is_metal());
        assert!(!ElementFamily::NobleGas.is_metal());
        assert!(!ElementFamily::Halogen.is_metal());
        assert!(!ElementFamily::Metalloid.is_metal());
    }

    #[test]
    fn test_matter_state_names() {
        assert_eq!(MatterState::Solid.name(), "Solid");
        assert_eq!(MatterState::Liquid.name(), "Liquid");
        assert_eq!(MatterState::Gas.name(), "Gas");
        assert_eq!(MatterState::ALL.len(), 3);
    }
}
