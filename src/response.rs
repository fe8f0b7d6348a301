//! Validated check and its response envelope

use serde::Serialize;

use crate::capacity::{compute, PlateResult};
use crate::error::CalcResult;
use crate::input::PlateInput;
use crate::report::Report;

/// Response body of a check
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PlateResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl CheckResponse {
    pub fn from_outcome(outcome: CalcResult<PlateResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                success: true,
                error: None,
                report: Some(Report::from_result(&result)),
                result: Some(result),
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
            result: None,
            report: None,
        }
    }
}

/// Validate and compute in one step
pub fn run_check(input: PlateInput) -> CalcResult<PlateResult> {
    input.validate()?;
    Ok(compute(&input))
}
