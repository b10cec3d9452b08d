//! Unified error types for the sections service.
//!
//! Storage failures bubble up unchanged as [`Error::Database`]; the service layer turns
//! domain conditions into [`Error::SectionNotFound`] and [`Error::DuplicateSectionNumber`].
//! The HTTP layer decides the status code, see [`crate::api::ApiError`].

use thiserror::Error;

/// Errors produced by the configuration, storage and service layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No section row exists for the requested id
    #[error("section {id} not found")]
    SectionNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Another section already uses this section number
    #[error("section number {section_number} already exists")]
    DuplicateSectionNumber {
        /// The conflicting section number
        section_number: i64,
    },

    /// I/O failure (binding the listener, reading files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
