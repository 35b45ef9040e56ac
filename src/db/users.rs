//! User repository for login accounts.

use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::User;

/// Internal row type for user queries. Carries the password hash, which is
/// only exposed through [`UserRepository::get_password_hash`].
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Find a user by email and return them together with their password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            let hash = r.password_hash.clone();
            (r.into(), hash)
        }))
    }

    /// Create a new user.
    ///
    /// Email uniqueness is enforced by the schema, so concurrent
    /// registrations with the same email cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (name, email, password_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, email, password_hash
            ",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }
}
