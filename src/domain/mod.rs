//! Domain layer for the Zontacts plugin.
//!
//! This module contains the core domain types for the contact directory,
//! independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`contact`]: Contact model and avatar codes
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use zontacts::domain::{AvatarCode, Contact};
//!
//! let contact = Contact {
//!     id: 1,
//!     name: "Jo Smith".to_string(),
//!     phone: "555-1234".to_string(),
//!     email: "jo@x.com".to_string(),
//!     avatar: AvatarCode::Female,
//! };
//! assert!(contact.matches_query("jo"));
//! ```

pub mod contact;
pub mod error;

pub use contact::{AvatarCode, Contact};
pub use error::{Result, ValidationError, ZontactsError};
