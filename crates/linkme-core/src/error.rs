//! Unified error type for the data-access layers.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for LinkMe.
///
/// The data layer does not try to interpret storage failures: whatever the
/// database reports is carried up as [`LinkMeError::Database`] and callers
/// decide what it means.
#[derive(Error, Debug)]
pub enum LinkMeError {
    // ============ Domain Errors ============
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinkMeError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for LinkMeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for LinkMeError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {}", err))
    }
}
