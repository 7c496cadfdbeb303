//! Error types for the Zontacts plugin.
//!
//! This module defines the per-field validation errors raised by the
//! add-contact form, the centralized [`ZontactsError`] type, and a [`Result`]
//! alias used throughout the plugin. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// Validation failure for a single form field.
///
/// Each variant corresponds to one field of the add-contact form. Validation
/// surfaces these inline next to the offending field and blocks submission;
/// no partial submission is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is shorter than the required minimum of two characters.
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    /// The phone field is empty.
    #[error("Phone is required")]
    PhoneMissing,

    /// The email does not contain an `@`.
    #[error("Email must contain '@'")]
    EmailInvalid,
}

/// The main error type for Zontacts plugin operations.
///
/// Consolidates the error conditions that can occur outside of per-field form
/// validation: fetch transport failures, theme loading, configuration parsing,
/// and I/O. All failures are locally recoverable; the plugin has no fatal
/// error path.
#[derive(Debug, Error)]
pub enum ZontactsError {
    /// A form field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The contact fetch failed or returned an unusable payload.
    ///
    /// Carries a human-readable description shown next to the results count.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Zontacts operations.
pub type Result<T> = std::result::Result<T, ZontactsError>;
