//! Plate check inputs and the bounds the host enforces on them

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Inputs for a single plate check.
///
/// Loads and moments are unfactored working values. Any field missing from
/// a JSON document falls back to the example value in [`PlateInput::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateInput {
    /// Plate width b in mm
    pub width_mm: f64,
    /// Plate thickness t in mm
    pub thickness_mm: f64,
    /// Applied bending moment M in kNm
    #[serde(rename = "moment_kNm")]
    pub moment_knm: f64,
    /// Applied total load P in kN
    #[serde(rename = "load_kN")]
    pub load_kn: f64,
    /// Steel yield strength fy in MPa
    #[serde(rename = "yield_strength_MPa")]
    pub yield_strength_mpa: f64,
    /// Capacity reduction factor φ
    pub phi: f64,
}

impl PlateInput {
    /// Create an input from raw values
    pub fn new(
        width_mm: f64,
        thickness_mm: f64,
        moment_knm: f64,
        load_kn: f64,
        yield_strength_mpa: f64,
        phi: f64,
    ) -> Self {
        Self {
            width_mm,
            thickness_mm,
            moment_knm,
            load_kn,
            yield_strength_mpa,
            phi,
        }
    }

    /// Set the plate geometry
    pub fn with_geometry(mut self, width_mm: f64, thickness_mm: f64) -> Self {
        self.width_mm = width_mm;
        self.thickness_mm = thickness_mm;
        self
    }

    /// Set the applied moment and load
    pub fn with_actions(mut self, moment_knm: f64, load_kn: f64) -> Self {
        self.moment_knm = moment_knm;
        self.load_kn = load_kn;
        self
    }

    /// Set the yield strength
    pub fn with_yield_strength(mut self, yield_strength_mpa: f64) -> Self {
        self.yield_strength_mpa = yield_strength_mpa;
        self
    }

    /// Set the capacity reduction factor
    pub fn with_phi(mut self, phi: f64) -> Self {
        self.phi = phi;
        self
    }

    /// Values in the same order as [`FIELDS`]
    pub fn values(&self) -> [f64; 6] {
        [
            self.width_mm,
            self.thickness_mm,
            self.moment_knm,
            self.load_kn,
            self.yield_strength_mpa,
            self.phi,
        ]
    }

    /// Check every field against its bounds.
    ///
    /// Stops at the first offending field, in [`FIELDS`] order.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in FIELDS.iter().zip(self.values()) {
            field.check(value)?;
        }
        Ok(())
    }

    /// Parse an input from JSON and validate it
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let input: PlateInput = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// Read a JSON input file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Pick the inputs for a run: the file when one is given, otherwise
    /// `self` (typically built from command line flags). Either way the
    /// chosen inputs are validated.
    pub fn or_from_file<P: AsRef<Path>>(self, file: Option<P>) -> CalcResult<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => {
                self.validate()?;
                Ok(self)
            }
        }
    }
}

impl Default for PlateInput {
    fn default() -> Self {
        Self {
            width_mm: 200.0,
            thickness_mm: 10.0,
            moment_knm: 50.0,
            load_kn: 100.0,
            yield_strength_mpa: 250.0,
            phi: 0.9,
        }
    }
}

/// Descriptor for one input field, as presented to an operator
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InputField {
    /// JSON key of the field
    pub key: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Unit suffix, empty for dimensionless values
    pub unit: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound, if any
    pub max: Option<f64>,
    /// Example value
    pub default: f64,
    /// Suggested increment for spinner widgets
    pub step: f64,
}

impl InputField {
    /// Check a value against this field's bounds
    pub fn check(&self, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::NonFinite(self.key));
        }
        if value < self.min {
            return Err(CalcError::BelowMinimum {
                field: self.key,
                min: self.min,
                value,
            });
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(CalcError::AboveMaximum {
                    field: self.key,
                    max,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// The six input fields, in display order
pub const FIELDS: [InputField; 6] = [
    InputField {
        key: "width_mm",
        label: "Plate width b",
        unit: "mm",
        min: 1.0,
        max: None,
        default: 200.0,
        step: 1.0,
    },
    InputField {
        key: "thickness_mm",
        label: "Plate thickness t",
        unit: "mm",
        min: 1.0,
        max: None,
        default: 10.0,
        step: 0.1,
    },
    InputField {
        key: "moment_kNm",
        label: "Applied bending moment M",
        unit: "kNm",
        min: 0.0,
        max: None,
        default: 50.0,
        step: 1.0,
    },
    InputField {
        key: "load_kN",
        label: "Applied total load P",
        unit: "kN",
        min: 0.0,
        max: None,
        default: 100.0,
        step: 1.0,
    },
    InputField {
        key: "yield_strength_MPa",
        label: "Steel yield strength fy",
        unit: "MPa",
        min: 100.0,
        max: None,
        default: 250.0,
        step: 5.0,
    },
    InputField {
        key: "phi",
        label: "Capacity reduction factor φ",
        unit: "",
        min: 0.0,
        max: Some(1.0),
        default: 0.9,
        step: 0.05,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_field_table() {
        let input = PlateInput::default();
        for (field, value) in FIELDS.iter().zip(input.values()) {
            assert_eq!(field.default, value, "default for {}", field.key);
        }
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_thickness_below_minimum() {
        let input = PlateInput::default().with_geometry(200.0, 0.5);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("thickness_mm"));
        assert!(matches!(err, CalcError::BelowMinimum { .. }));
    }

    #[test]
    fn test_phi_above_one() {
        let err = PlateInput::default().with_phi(1.2).validate().unwrap_err();
        assert!(matches!(err, CalcError::AboveMaximum { field: "phi", .. }));
    }

    #[test]
    fn test_phi_bounds_inclusive() {
        assert!(PlateInput::default().with_phi(0.0).validate().is_ok());
        assert!(PlateInput::default().with_phi(1.0).validate().is_ok());
    }

    #[test]
    fn test_yield_strength_minimum() {
        let err = PlateInput::default()
            .with_yield_strength(99.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("yield_strength_MPa"));
        assert!(PlateInput::default().with_yield_strength(100.0).validate().is_ok());
    }

    #[test]
    fn test_negative_load_rejected() {
        let err = PlateInput::default()
            .with_actions(10.0, -1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("load_kN"));
    }

    #[test]
    fn test_nan_rejected() {
        let err = PlateInput::default()
            .with_actions(f64::NAN, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CalcError::NonFinite("moment_kNm")));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input = PlateInput::from_json(r#"{"width_mm": 300.0, "moment_kNm": 12.5}"#).unwrap();
        assert_eq!(input.width_mm, 300.0);
        assert_eq!(input.moment_knm, 12.5);
        assert_eq!(input.thickness_mm, 10.0);
        assert_eq!(input.phi, 0.9);
    }

    #[test]
    fn test_json_out_of_range_rejected() {
        let err = PlateInput::from_json(r#"{"phi": -0.1}"#).unwrap_err();
        assert_eq!(err.field(), Some("phi"));
    }

    #[test]
    fn test_file_overrides_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plate.json");
        std::fs::write(&path, r#"{"width_mm": 900.0, "thickness_mm": 12.0}"#).unwrap();

        let flags = PlateInput::default().with_geometry(150.0, 8.0).with_phi(0.8);
        let input = flags.or_from_file(Some(&path)).unwrap();

        assert_eq!(input.width_mm, 900.0);
        assert_eq!(input.thickness_mm, 12.0);
        // Fields missing from the file take the example values, not the flags
        assert_eq!(input.phi, 0.9);
    }

    #[test]
    fn test_flags_used_without_file() {
        let flags = PlateInput::default().with_geometry(150.0, 8.0);
        let input = flags.or_from_file(None::<&Path>).unwrap();
        assert_eq!(input, flags);
    }

    #[test]
    fn test_out_of_range_flag_rejected() {
        let flags = PlateInput::default().with_yield_strength(50.0);
        let err = flags.or_from_file(None::<&Path>).unwrap_err();
        assert_eq!(err.field(), Some("yield_strength_MPa"));
    }

    #[test]
    fn test_out_of_range_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plate.json");
        std::fs::write(&path, r#"{"phi": 1.5}"#).unwrap();

        let err = PlateInput::default().or_from_file(Some(&path)).unwrap_err();
        assert!(matches!(err, CalcError::AboveMaximum { field: "phi", .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlateInput::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CalcError::IoError(_)));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_malformed_json() {
        let err = PlateInput::from_json("{not json").unwrap_err();
        assert!(matches!(err, CalcError::SerializationError(_)));
    }
}
