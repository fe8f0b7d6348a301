//! Plate check HTTP server

use std::net::SocketAddr;

use anyhow::Context;

use plate_check::api::create_router;

/// Bind address from `HOST` and `PORT`
fn bind_addr() -> anyhow::Result<SocketAddr> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8087".to_string());
    let addr = format!("{}:{}", host, port);
    addr.parse().with_context(|| format!("Invalid bind address {}", addr))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let addr = bind_addr()?;
    let app = create_router();

    log::info!("Plate check server listening on http://{}", addr);
    log::info!("  Health check: GET  /health");
    log::info!("  Fields:       GET  /api/v1/fields");
    log::info!("  Formulas:     GET  /api/v1/formulas");
    log::info!("  Check:        POST /api/v1/check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
