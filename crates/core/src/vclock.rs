//! Vector clocks
//!
//! The client never interprets a vector clock. It receives one with every
//! fetch and hands it back verbatim, either on a later write or as the
//! condition of an if-not-modified fetch. Equality is byte equality.

use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Opaque causality token attached to a stored value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VClock(Vec<u8>);

impl VClock {
    /// Wrap the raw bytes returned by the store
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode a clock from its standard base64 text form
    ///
    /// # Errors
    /// Returns `Error::InvalidVClock` if `s` is not valid base64.
    pub fn from_base64(s: &str) -> Result<Self> {
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map(Self)
            .map_err(|e| Error::InvalidVClock {
                reason: e.to_string(),
            })
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the clock, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Check whether the store sent an empty clock
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for VClock {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for VClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64::engine::general_purpose::STANDARD.encode(&self.0))
    }
}
