//! Alumni record repository.

use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{Alumni, NewAlumni};

/// Repository for alumni database operations.
pub struct AlumniRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AlumniRepository<'a> {
    /// Create a new alumni repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new alumni record, returning it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, record: &NewAlumni<'_>) -> Result<Alumni, RepositoryError> {
        let row = sqlx::query_as::<_, Alumni>(
            r"
            INSERT INTO alumni (name, department, year, email, phone, job)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, name, department, year, email, phone, job
            ",
        )
        .bind(record.name)
        .bind(record.department)
        .bind(record.year)
        .bind(record.email)
        .bind(record.phone)
        .bind(record.job)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all alumni records in insertion order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Alumni>, RepositoryError> {
        let rows = sqlx::query_as::<_, Alumni>(
            "SELECT id, name, department, year, email, phone, job FROM alumni ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get an alumni record by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Alumni>, RepositoryError> {
        let row = sqlx::query_as::<_, Alumni>(
            "SELECT id, name, department, year, email, phone, job FROM alumni WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an alumni record by id (hard delete).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM alumni WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
