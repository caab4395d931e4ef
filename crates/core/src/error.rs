//! Error types for core value construction
//!
//! These errors only arise when a caller builds a value type from
//! untrusted input (a raw integer, a base64 string, a config file).
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing core value types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A quorum was given as a negative number that is not a known sentinel
    #[error("invalid quorum: {value}")]
    InvalidQuorum {
        /// The rejected input, as written by the caller
        value: String,
    },

    /// A vector clock could not be decoded from its text form
    #[error("invalid vclock: {reason}")]
    InvalidVClock {
        /// Decoder message
        reason: String,
    },
}
