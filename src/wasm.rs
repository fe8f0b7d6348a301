//! WASM bindings for the plate check
//!
//! Lets a browser page run the check locally instead of calling the HTTP
//! server. Request and response bodies match `POST /api/v1/check`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::capacity::{compute, PlateResult};
use crate::error::CalcResult;
use crate::input::PlateInput;
use crate::response::CheckResponse;

// Use wee_alloc for smaller WASM binary
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
struct WasmCheckResponse {
    #[serde(flatten)]
    response: CheckResponse,
    /// Timing information in milliseconds
    ms_elapsed: f64,
}

fn run(request_json: &str) -> CalcResult<PlateResult> {
    let input = PlateInput::from_json(request_json)?;
    Ok(compute(&input))
}

/// Build the response JSON, timing the check with `now` (milliseconds)
fn respond(request_json: &str, now: impl Fn() -> f64) -> String {
    let start = now();

    let response = WasmCheckResponse {
        response: CheckResponse::from_outcome(run(request_json)),
        ms_elapsed: now() - start,
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

/// Check a plate
///
/// Takes a JSON `PlateInput` (missing fields use the example values) and
/// returns a JSON response string.
#[wasm_bindgen]
pub fn check(request_json: &str) -> String {
    respond(request_json, js_sys::Date::now)
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
