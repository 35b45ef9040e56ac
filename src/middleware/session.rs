//! Session layer configuration.
//!
//! Sessions live in an in-memory store behind an opaque random cookie token,
//! so they do not survive a process restart. The cookie is HttpOnly and
//! SameSite=Strict with a 24 hour inactivity expiry.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "alumni_session";

/// Session expiry time in seconds (24 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        // The server binds plain HTTP on localhost; no Secure attribute.
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
