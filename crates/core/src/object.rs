//! Native stored object
//!
//! `KvObject` is what the store hands back for a key before any domain
//! conversion: the value bytes plus the metadata stored alongside them.
//! A single fetch may return several objects when the key has siblings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content type assumed when the store does not report one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A stored value together with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvObject {
    value: Vec<u8>,
    content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vtag: Option<String>,
    /// Microseconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<u64>,
    #[serde(default)]
    deleted: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    user_meta: BTreeMap<String, String>,
}

impl KvObject {
    /// Create an object holding `value` with the default content type
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            charset: None,
            vtag: None,
            last_modified: None,
            deleted: false,
            user_meta: BTreeMap::new(),
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the charset
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the vtag
    pub fn with_vtag(mut self, vtag: impl Into<String>) -> Self {
        self.vtag = Some(vtag.into());
        self
    }

    /// Set the last-modified time (microseconds since epoch)
    pub fn with_last_modified(mut self, micros: u64) -> Self {
        self.last_modified = Some(micros);
        self
    }

    /// Mark this object as a tombstone
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Add a user metadata entry, replacing any previous value for `key`
    pub fn with_user_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_meta.insert(key.into(), value.into());
        self
    }

    /// Value bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Value as UTF-8, if it is valid UTF-8
    pub fn value_as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Consume the object, returning its value bytes
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// Content type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Charset, if one was stored
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Vtag, if one was stored
    pub fn vtag(&self) -> Option<&str> {
        self.vtag.as_deref()
    }

    /// Last-modified time in microseconds since epoch
    pub fn last_modified(&self) -> Option<u64> {
        self.last_modified
    }

    /// Whether this object is a tombstone
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// User metadata, sorted by key
    pub fn user_meta(&self) -> &BTreeMap<String, String> {
        &self.user_meta
    }
}
