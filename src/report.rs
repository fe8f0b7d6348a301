//! Presentation of a plate check result
//!
//! Builds the labelled metrics, stress lines, and formula text shown to an
//! operator. Renders as plain text through `Display` or as JSON through serde.

use std::fmt;

use serde::Serialize;

use crate::capacity::{PlateResult, UtilisationStatus};

pub const TITLE: &str = "Plate Bending & Shear Check (AS 4100:2020)";

pub const CAPTION: &str = "Note: Inputs are unfactored working loads and moments.";

pub const DISCLAIMER: &str =
    "Simplified implementation. For detailed checks, refer to AS 4100:2020 provisions.";

/// Formulas used, reproduced verbatim for the operator
pub const FORMULAS: [&str; 9] = [
    "Area: **A = b·t**",
    "Moment of inertia: **I = b·t³ / 12**",
    "Elastic section modulus: **Zₑ = I / (t/2)**",
    "Compactness limit: **b/t ≤ 60·ε**, with **ε = √(250/fy)**",
    "Design bending capacity: **φM = φ·fy·Zₑ / 10⁶**  (→ kNm)",
    "Design shear capacity: **φV = φ·0.6·fy·A / 1000**  (→ kN)",
    "Bending stress: **σ = M / Zₑ**",
    "Shear stress: **τ = P / A**",
    "Utilisation = applied / capacity × 100%",
];

/// Format a number with thousands separators and fixed decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = grouped.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value.is_sign_negative() && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// A labelled numeric value with its unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// Value formatted for display, including the unit
    pub display: String,
}

impl Metric {
    pub fn new(label: &'static str, value: f64, unit: &'static str, decimals: usize) -> Self {
        let number = format_number(value, decimals);
        let display = if unit.is_empty() {
            number
        } else {
            format!("{} {}", number, unit)
        };
        Self {
            label,
            value,
            unit,
            display,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.display)
    }
}

/// Operator facing summary of a [`PlateResult`]
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub caption: &'static str,
    pub bending: Vec<Metric>,
    pub shear: Vec<Metric>,
    pub bending_status: UtilisationStatus,
    pub shear_status: UtilisationStatus,
    pub stresses: Vec<Metric>,
    pub section: Vec<Metric>,
    pub classification: String,
    pub formulas: Vec<&'static str>,
    pub disclaimer: &'static str,
}

impl Report {
    pub fn from_result(result: &PlateResult) -> Self {
        let input = &result.input;

        let bending = vec![
            Metric::new(
                "Design bending capacity φM",
                result.design_moment_capacity_knm,
                "kNm",
                2,
            ),
            Metric::new("Applied moment M", input.moment_knm, "kNm", 2),
            Metric::new("Bending utilisation", result.bending_utilisation_pct, "%", 1),
        ];

        let shear = vec![
            Metric::new(
                "Design shear capacity φV",
                result.design_shear_capacity_kn,
                "kN",
                2,
            ),
            Metric::new("Applied shear P", input.load_kn, "kN", 2),
            Metric::new("Shear utilisation", result.shear_utilisation_pct, "%", 1),
        ];

        let stresses = vec![
            Metric::new(
                "Actual bending stress σ",
                result.actual_bending_stress_mpa,
                "MPa",
                2,
            ),
            Metric::new(
                "Actual shear stress τ",
                result.actual_shear_stress_mpa,
                "MPa",
                2,
            ),
        ];

        let section = vec![
            Metric::new("Area A", result.area_mm2, "mm²", 2),
            Metric::new("Moment of inertia I", result.inertia_mm4, "mm⁴", 2),
            Metric::new("Elastic section modulus Zₑ", result.elastic_modulus_mm3, "mm³", 2),
            Metric::new(
                "Effective section modulus",
                result.effective_modulus_mm3,
                "mm³",
                2,
            ),
            Metric::new("ε", result.epsilon, "", 3),
        ];

        let classification = format!(
            "{} (b/t = {} {} 60·ε = {})",
            result.classification(),
            format_number(result.slenderness_ratio, 2),
            if result.is_compact { "≤" } else { ">" },
            format_number(result.slenderness_limit, 2),
        );

        Self {
            title: TITLE,
            caption: CAPTION,
            bending,
            shear,
            bending_status: result.bending_status(),
            shear_status: result.shear_status(),
            stresses,
            section,
            classification,
            formulas: FORMULAS.to_vec(),
            disclaimer: DISCLAIMER,
        }
    }
}

fn write_metrics(f: &mut fmt::Formatter<'_>, metrics: &[Metric]) -> fmt::Result {
    for m in metrics {
        writeln!(f, "  {:<30} {:>18}", m.label, m.display)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.caption)?;
        writeln!(f)?;

        writeln!(f, "Results")?;
        writeln!(f, " Bending [{}]", self.bending_status.as_str())?;
        write_metrics(f, &self.bending)?;
        writeln!(f, " Shear [{}]", self.shear_status.as_str())?;
        write_metrics(f, &self.shear)?;
        writeln!(f)?;

        writeln!(f, "Calculated stresses")?;
        for m in &self.stresses {
            writeln!(f, "- {} = {}", m.label, m.display)?;
        }
        writeln!(f)?;

        writeln!(f, "Section")?;
        write_metrics(f, &self.section)?;
        writeln!(f, "  {}", self.classification)?;
        writeln!(f)?;

        writeln!(f, "Formulas used")?;
        for formula in &self.formulas {
            writeln!(f, "- {}", formula)?;
        }
        writeln!(f)?;

        write!(f, "{}", self.disclaimer)
    }
}
