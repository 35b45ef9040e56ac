//! Login account model.

/// A registered user.
///
/// The password hash never leaves the repository layer; see
/// `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database id, assigned on insert.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login identifier; unique across users.
    pub email: String,
}
