//! Section properties of a solid rectangular plate

use serde::{Deserialize, Serialize};

/// Geometric properties of a plate bent about its weak axis.
///
/// All values in millimetre units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateSection {
    /// Plate width b in mm
    pub width: f64,
    /// Plate thickness t in mm
    pub thickness: f64,
    /// Cross-sectional area in mm²
    pub area: f64,
    /// Second moment of area about the weak axis in mm⁴
    pub inertia: f64,
    /// Elastic section modulus in mm³
    pub elastic_modulus: f64,
}

impl PlateSection {
    /// Derive the section properties from width and thickness
    pub fn rectangular(width: f64, thickness: f64) -> Self {
        let area = width * thickness;
        let inertia = width * thickness.powi(3) / 12.0;
        let elastic_modulus = inertia / (thickness / 2.0);

        Self {
            width,
            thickness,
            area,
            inertia,
            elastic_modulus,
        }
    }

    /// Width to thickness ratio b/t
    pub fn slenderness_ratio(&self) -> f64 {
        self.width / self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_plate() {
        let section = PlateSection::rectangular(200.0, 10.0);

        assert_eq!(section.area, 2000.0);
        assert_relative_eq!(section.inertia, 166_666.666_666_7, max_relative = 1e-10);
        assert_relative_eq!(section.elastic_modulus, 33_333.333_333_3, max_relative = 1e-10);
    }

    #[test]
    fn test_elastic_modulus_matches_bt_squared_over_six() {
        let section = PlateSection::rectangular(350.0, 16.0);
        assert_relative_eq!(
            section.elastic_modulus,
            350.0 * 16.0_f64.powi(2) / 6.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_slenderness_ratio() {
        let section = PlateSection::rectangular(900.0, 10.0);
        assert_eq!(section.slenderness_ratio(), 90.0);
    }
}
