//! Bending and shear capacity check of a rectangular steel plate
//!
//! Simplified AS 4100:2020 formula set:
//! - φM = φ·fy·Zₑ / 10⁶ (kNm), with Zₑ reduced to 0.7·Zₑ for non-compact plates
//! - φV = φ·0.6·fy·A / 1000 (kN)
//! - σ = M / Zₑ and τ = P / A, both on the unreduced section
//!
//! The actual bending stress deliberately uses the full elastic modulus even
//! when the capacity uses the reduced one.

use serde::{Deserialize, Serialize};

use crate::compactness::{classification_label, Compactness};
use crate::input::PlateInput;
use crate::section::PlateSection;

/// Shear yield coefficient, 0.6·fy
pub const SHEAR_YIELD_FACTOR: f64 = 0.6;

/// N·mm per kN·m
const NMM_PER_KNM: f64 = 1e6;

/// N per kN
const N_PER_KN: f64 = 1e3;

/// Everything derived from one [`PlateInput`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateResult {
    /// The inputs this result was computed from
    pub input: PlateInput,
    pub area_mm2: f64,
    pub inertia_mm4: f64,
    pub elastic_modulus_mm3: f64,
    pub epsilon: f64,
    pub slenderness_ratio: f64,
    pub slenderness_limit: f64,
    pub is_compact: bool,
    pub effective_modulus_mm3: f64,
    #[serde(rename = "design_moment_capacity_kNm")]
    pub design_moment_capacity_knm: f64,
    #[serde(rename = "design_shear_capacity_kN")]
    pub design_shear_capacity_kn: f64,
    #[serde(rename = "actual_bending_stress_MPa")]
    pub actual_bending_stress_mpa: f64,
    #[serde(rename = "actual_shear_stress_MPa")]
    pub actual_shear_stress_mpa: f64,
    pub bending_utilisation_pct: f64,
    pub shear_utilisation_pct: f64,
}

/// Pass/fail reading of a utilisation percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilisationStatus {
    Pass,
    Fail,
}

impl UtilisationStatus {
    /// Pass at or below 100 %
    pub fn from_pct(pct: f64) -> Self {
        if pct <= 100.0 {
            UtilisationStatus::Pass
        } else {
            UtilisationStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UtilisationStatus::Pass => "OK",
            UtilisationStatus::Fail => "NG",
        }
    }
}

impl PlateResult {
    /// "Compact" or "Non-compact"
    pub fn classification(&self) -> &'static str {
        classification_label(self.is_compact)
    }

    pub fn bending_status(&self) -> UtilisationStatus {
        UtilisationStatus::from_pct(self.bending_utilisation_pct)
    }

    pub fn shear_status(&self) -> UtilisationStatus {
        UtilisationStatus::from_pct(self.shear_utilisation_pct)
    }

    /// True when both bending and shear pass
    pub fn is_adequate(&self) -> bool {
        self.bending_status() == UtilisationStatus::Pass
            && self.shear_status() == UtilisationStatus::Pass
    }
}

/// Design moment capacity φM in kNm
pub fn design_moment_capacity(phi: f64, yield_strength: f64, effective_modulus: f64) -> f64 {
    phi * yield_strength * effective_modulus / NMM_PER_KNM
}

/// Design shear capacity φV in kN
pub fn design_shear_capacity(phi: f64, yield_strength: f64, area: f64) -> f64 {
    phi * SHEAR_YIELD_FACTOR * yield_strength * area / N_PER_KN
}

/// Peak bending stress σ in MPa for a moment in kNm
pub fn bending_stress(moment_knm: f64, elastic_modulus: f64) -> f64 {
    (moment_knm * NMM_PER_KNM) / elastic_modulus
}

/// Average shear stress τ in MPa for a load in kN
pub fn shear_stress(load_kn: f64, area: f64) -> f64 {
    (load_kn * N_PER_KN) / area
}

/// Applied over capacity in percent; zero when there is no capacity
pub fn utilisation(applied: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        100.0 * applied / capacity
    } else {
        0.0
    }
}

/// Run the plate check.
///
/// Performs no validation. Inputs are expected to satisfy the bounds in
/// [`crate::input::FIELDS`]; a zero thickness or yield strength gives
/// non-finite results.
pub fn compute(input: &PlateInput) -> PlateResult {
    let section = PlateSection::rectangular(input.width_mm, input.thickness_mm);
    let compactness = Compactness::classify(&section, input.yield_strength_mpa);

    let phi_m = design_moment_capacity(
        input.phi,
        input.yield_strength_mpa,
        compactness.effective_modulus,
    );
    let phi_v = design_shear_capacity(input.phi, input.yield_strength_mpa, section.area);

    let sigma = bending_stress(input.moment_knm, section.elastic_modulus);
    let tau = shear_stress(input.load_kn, section.area);

    let result = PlateResult {
        input: *input,
        area_mm2: section.area,
        inertia_mm4: section.inertia,
        elastic_modulus_mm3: section.elastic_modulus,
        epsilon: compactness.epsilon,
        slenderness_ratio: compactness.slenderness_ratio,
        slenderness_limit: compactness.slenderness_limit,
        is_compact: compactness.is_compact,
        effective_modulus_mm3: compactness.effective_modulus,
        design_moment_capacity_knm: phi_m,
        design_shear_capacity_kn: phi_v,
        actual_bending_stress_mpa: sigma,
        actual_shear_stress_mpa: tau,
        bending_utilisation_pct: utilisation(input.moment_knm, phi_m),
        shear_utilisation_pct: utilisation(input.load_kn, phi_v),
    };

    log::debug!(
        "φM = {:.3} kNm ({:.1} %), φV = {:.3} kN ({:.1} %)",
        phi_m,
        result.bending_utilisation_pct,
        phi_v,
        result.shear_utilisation_pct
    );

    result
}
