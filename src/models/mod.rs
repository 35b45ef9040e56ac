//! Domain models.

pub mod alumni;
pub mod session;
pub mod user;

pub use alumni::{Alumni, NewAlumni};
pub use session::{CurrentUser, keys as session_keys};
pub use user::User;
