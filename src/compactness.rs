//! Plate slenderness classification
//!
//! A plate is compact when its width to thickness ratio does not exceed
//! `60·ε`, with `ε = √(250/fy)`. Non-compact plates carry bending on a
//! reduced section modulus of `0.7·Zₑ`. This is a simplified limit, not the
//! full plate element slenderness provisions of AS 4100.

use serde::{Deserialize, Serialize};

use crate::section::PlateSection;

/// Base slenderness limit at fy = 250 MPa
pub const BASE_SLENDERNESS_LIMIT: f64 = 60.0;

/// Reference yield strength for ε in MPa
pub const REFERENCE_YIELD_MPA: f64 = 250.0;

/// Section modulus factor applied to non-compact plates
pub const NON_COMPACT_MODULUS_FACTOR: f64 = 0.7;

/// "Compact" or "Non-compact"
pub fn classification_label(is_compact: bool) -> &'static str {
    if is_compact {
        "Compact"
    } else {
        "Non-compact"
    }
}

/// Outcome of the slenderness check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compactness {
    /// Yield strength adjustment ε = √(250/fy)
    pub epsilon: f64,
    /// b/t of the plate
    pub slenderness_ratio: f64,
    /// Limiting b/t, 60·ε
    pub slenderness_limit: f64,
    /// True when b/t ≤ limit (boundary inclusive)
    pub is_compact: bool,
    /// Section modulus used for bending capacity in mm³
    pub effective_modulus: f64,
}

impl Compactness {
    /// Classify a section for the given yield strength
    pub fn classify(section: &PlateSection, yield_strength: f64) -> Self {
        let epsilon = (REFERENCE_YIELD_MPA / yield_strength).sqrt();
        let slenderness_limit = BASE_SLENDERNESS_LIMIT * epsilon;
        let slenderness_ratio = section.slenderness_ratio();
        let is_compact = slenderness_ratio <= slenderness_limit;

        let effective_modulus = if is_compact {
            section.elastic_modulus
        } else {
            NON_COMPACT_MODULUS_FACTOR * section.elastic_modulus
        };

        log::debug!(
            "b/t = {:.3} vs limit {:.3}: {}",
            slenderness_ratio,
            slenderness_limit,
            classification_label(is_compact)
        );

        Self {
            epsilon,
            slenderness_ratio,
            slenderness_limit,
            is_compact,
            effective_modulus,
        }
    }

    /// Short classification label
    pub fn label(&self) -> &'static str {
        classification_label(self.is_compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_250_limit() {
        let section = PlateSection::rectangular(200.0, 10.0);
        let c = Compactness::classify(&section, 250.0);

        assert_eq!(c.epsilon, 1.0);
        assert_eq!(c.slenderness_limit, 60.0);
        assert!(c.is_compact);
        assert_eq!(c.label(), "Compact");
        assert_eq!(c.effective_modulus, section.elastic_modulus);
    }

    #[test]
    fn test_boundary_is_compact() {
        let section = PlateSection::rectangular(600.0, 10.0);
        assert!(Compactness::classify(&section, 250.0).is_compact);

        let wider = PlateSection::rectangular(600.000_001, 10.0);
        assert!(!Compactness::classify(&wider, 250.0).is_compact);
    }

    #[test]
    fn test_higher_grade_tightens_limit() {
        // fy = 1000 gives ε = 0.5 and a limit of 30
        let section = PlateSection::rectangular(300.0, 10.0);
        let c = Compactness::classify(&section, 1000.0);
        assert_eq!(c.slenderness_limit, 30.0);
        assert!(c.is_compact);

        let section = PlateSection::rectangular(310.0, 10.0);
        assert!(!Compactness::classify(&section, 1000.0).is_compact);
    }

    #[test]
    fn test_non_compact_reduces_modulus() {
        let section = PlateSection::rectangular(900.0, 10.0);
        let c = Compactness::classify(&section, 250.0);

        assert!(!c.is_compact);
        assert_eq!(c.label(), "Non-compact");
        assert_eq!(c.effective_modulus, 0.7 * section.elastic_modulus);
    }
}
