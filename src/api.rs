//! HTTP API for the plate check
//!
//! Routes:
//! - `GET  /health`
//! - `GET  /api/v1/fields`
//! - `GET  /api/v1/formulas`
//! - `POST /api/v1/check`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::input::{InputField, PlateInput, FIELDS};
use crate::report::FORMULAS;
use crate::response::{run_check, CheckResponse};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn fields() -> Json<Vec<InputField>> {
    Json(FIELDS.to_vec())
}

async fn formulas() -> Json<Vec<&'static str>> {
    Json(FORMULAS.to_vec())
}

async fn check(payload: Result<Json<PlateInput>, JsonRejection>) -> impl IntoResponse {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            log::warn!("Rejected check request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(CheckResponse::failure(rejection.body_text())),
            );
        }
    };

    let outcome = run_check(input);
    match &outcome {
        Ok(result) => log::info!(
            "Checked {}x{} mm plate: bending {:.1} %, shear {:.1} %",
            input.width_mm,
            input.thickness_mm,
            result.bending_utilisation_pct,
            result.shear_utilisation_pct
        ),
        Err(e) => log::warn!("Invalid check input: {}", e),
    }

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(CheckResponse::from_outcome(outcome)))
}

/// Build the API router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/fields", get(fields))
        .route("/api/v1/formulas", get(formulas))
        .route("/api/v1/check", post(check))
        .layer(cors)
}
