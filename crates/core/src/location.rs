//! Location of a stored item
//!
//! A `Location` names one item in the store by three opaque byte strings:
//! - bucket type: the namespace that carries bucket properties
//! - bucket: a collection of keys inside the bucket type
//! - key: the item itself
//!
//! Locations are immutable once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket type used when the caller does not name one.
pub const DEFAULT_BUCKET_TYPE: &str = "default";

/// Address of a single item: bucket type, bucket and key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    bucket_type: Vec<u8>,
    bucket: Vec<u8>,
    key: Vec<u8>,
}

impl Location {
    /// Create a location from its three parts
    pub fn new(
        bucket_type: impl Into<Vec<u8>>,
        bucket: impl Into<Vec<u8>>,
        key: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            bucket_type: bucket_type.into(),
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Create a location in the `"default"` bucket type
    pub fn in_default_type(bucket: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        Self::new(DEFAULT_BUCKET_TYPE, bucket, key)
    }

    /// Bucket type bytes
    pub fn bucket_type(&self) -> &[u8] {
        &self.bucket_type
    }

    /// Bucket bytes
    pub fn bucket(&self) -> &[u8] {
        &self.bucket
    }

    /// Key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Check whether this location lives in the default bucket type
    pub fn is_default_type(&self) -> bool {
        self.bucket_type == DEFAULT_BUCKET_TYPE.as_bytes()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            String::from_utf8_lossy(&self.bucket_type),
            String::from_utf8_lossy(&self.bucket),
            String::from_utf8_lossy(&self.key)
        )
    }
}
