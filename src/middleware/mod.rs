//! Session and authentication middleware.

pub mod auth;
pub mod session;

pub use auth::{RequireAuth, set_current_user};
pub use session::create_session_layer;
