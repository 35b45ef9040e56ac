//! Alumni Manager library.
//!
//! Server-rendered alumni record management: registered users log in and
//! create, list, or delete alumni records through HTML forms.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - `SQLite` for users and alumni records
//! - tower-sessions for cookie-based login sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod validate;

use axum::Router;

use middleware::create_session_layer;
use state::AppState;

/// Build the application router with the session layer applied.
///
/// Used by both `main` and the integration tests so the full request
/// pipeline (session cookies included) is exercised the same way.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(create_session_layer())
        .with_state(state)
}
