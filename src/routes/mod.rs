//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (database connectivity)
//!
//! # Auth (no session required)
//! GET  /register        - Registration form
//! POST /register        - Create account, redirect to /login
//! GET  /login           - Login form
//! POST /login           - Establish session, redirect to /
//! GET  /logout          - Destroy session, redirect to /login
//!
//! # Alumni (session required; unauthenticated requests redirect to /login)
//! GET  /                - Alumni listing
//! GET  /add             - New-alumni form
//! POST /add             - Create record, redirect to /
//! GET  /delete/{id}     - Delete record, redirect to /
//! ```

pub mod alumni;
pub mod auth;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(auth::router())
        .merge(alumni::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
