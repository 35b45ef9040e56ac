//! Authentication service.
//!
//! Registration and login over the user repository. Passwords are stored as
//! Argon2id hashes; verification is constant-time inside the argon2 crate.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::{RepositoryError, UserRepository};
use crate::models::User;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Wrong email or password. Deliberately does not distinguish the two.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("failed to hash password")]
    PasswordHash,

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Inputs are expected to be trimmed and validated by the caller; the
    /// duplicate-email check is delegated to the store's unique constraint so
    /// concurrent registrations cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let password_hash = hash_password(password)?;

        self.users
            .create(name, email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or the
    /// password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let (user, password_hash) = self
            .users
            .get_password_hash(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
