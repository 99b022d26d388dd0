//! Error types shared across the tapcard crates.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while validating profile data.
#[derive(Error, Debug)]
pub enum Error {
    /// A profile field has an invalid value (empty, too long, wrong shape).
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// The name of the invalid field.
        field: &'static str,
        /// Description of what's wrong.
        reason: String,
    },

    /// A social platform identifier outside the supported set.
    #[error("unknown social platform: {0}")]
    UnknownPlatform(String),
}
