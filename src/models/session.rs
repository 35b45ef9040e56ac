//! Session-stored types for authentication.

use serde::{Deserialize, Serialize};

/// Session-stored user identity.
///
/// Minimal data kept in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database id.
    pub id: i64,
    /// User's display name.
    pub name: String,
    /// User's email address.
    pub email: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
