//! Alumni record model.

/// One alumni record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Alumni {
    /// Database id, assigned on insert.
    pub id: i64,
    pub name: String,
    pub department: String,
    /// Passing year; validated into `[1980, current year]` at creation.
    pub year: i64,
    /// No uniqueness constraint, unlike user emails.
    pub email: String,
    /// Exactly ten decimal digits.
    pub phone: String,
    pub job: String,
}

/// Fields for a new alumni record, validated before insertion.
#[derive(Debug, Clone, Copy)]
pub struct NewAlumni<'a> {
    pub name: &'a str,
    pub department: &'a str,
    pub year: i64,
    pub email: &'a str,
    pub phone: &'a str,
    pub job: &'a str,
}
