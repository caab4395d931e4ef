//! Error types for command execution.
//!
//! All errors from building or executing a command are represented by the
//! [`Error`] enum. Not-found and unchanged fetches are NOT errors: they come
//! back as a normal [`FetchResponse`](crate::FetchResponse) with the
//! matching flag set.
//!
//! Collaborator failures are carried without loss:
//! - a [`TransportError`] from the executor is wrapped as-is
//! - a [`ConversionError`] from the converter is wrapped with the index of
//!   the object that failed

use serde::{Deserialize, Serialize};

/// Category of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportErrorKind {
    /// Connection refused, reset, or otherwise broken
    Network,
    /// The deadline elapsed before the store answered
    Timeout,
    /// No node could serve the request
    Unavailable,
    /// The store answered with an error message
    Remote,
    /// Anything else
    Other,
}

/// Failure reported by an [`Executor`](crate::Executor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct TransportError {
    /// Failure category
    pub kind: TransportErrorKind,
    /// Human-readable detail from the transport
    pub message: String,
}

impl TransportError {
    /// Create a transport error
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Network failure
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    /// Deadline expiry
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    /// Cluster unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Unavailable, message)
    }

    /// Error message returned by the store
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Remote, message)
    }
}

/// Failure reported by a [`Converter`](crate::Converter) for one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{reason}")]
pub struct ConversionError {
    /// Why the object could not be converted
    pub reason: String,
}

impl ConversionError {
    /// Create a conversion error
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Command errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Transport | `Transport` | Executor failed; no response was built |
/// | Conversion | `Conversion` | Converter failed; the whole fetch is aborted |
/// | Validation | `InvalidOption` | An option value could not be constructed |
/// | Configuration | `Config` | Config file unreadable or invalid |
///
/// # Example
///
/// ```ignore
/// use ringkv::{fetch, Error, Location};
///
/// match fetch(location).execute(&cluster) {
///     Ok(response) if response.is_not_found() => println!("no such key"),
///     Ok(response) => println!("{:?}", response.value()),
///     Err(Error::Transport(e)) => println!("cluster said: {}", e),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Collaborator Errors ====================
    /// The executor failed
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The converter rejected one of the returned objects
    #[error("conversion failed for object {index}: {source}")]
    Conversion {
        /// Position of the failing object in the raw response
        index: usize,
        /// Converter error
        source: ConversionError,
    },

    // ==================== Validation Errors ====================
    /// An option value was invalid
    #[error("invalid option: {reason}")]
    InvalidOption {
        /// What was wrong with the value
        reason: String,
    },

    /// Configuration could not be read or parsed
    #[error("config error: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },
}

impl From<ringkv_core::Error> for Error {
    fn from(err: ringkv_core::Error) -> Self {
        Error::InvalidOption {
            reason: err.to_string(),
        }
    }
}
