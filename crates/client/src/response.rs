//! Result of a fetch.
//!
//! A [`FetchResponse`] is built once per execution and never changes.
//! Not-found and unchanged are ordinary outcomes reported through flags,
//! not errors.

use serde::{Deserialize, Serialize};

use ringkv_core::VClock;

/// Converted values of a fetch together with the store's metadata.
///
/// `value` is absent when the store returned no objects, which is the
/// case for a missing key and for an unchanged conditional fetch.
/// Otherwise it holds one converted value per sibling, in store order.
///
/// # Example
///
/// ```text
/// let response = fetch(location).execute(&cluster)?;
///
/// if response.is_not_found() {
///     return Ok(None);
/// }
/// let clock = response.vclock().cloned();
/// let objects = response.into_value().unwrap_or_default();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse<T> {
    not_found: bool,
    unchanged: bool,
    vclock: Option<VClock>,
    value: Option<Vec<T>>,
}

impl<T> FetchResponse<T> {
    pub(crate) fn new(
        not_found: bool,
        unchanged: bool,
        values: Vec<T>,
        vclock: Option<VClock>,
    ) -> Self {
        Self {
            not_found,
            unchanged,
            vclock,
            value: if values.is_empty() { None } else { Some(values) },
        }
    }

    /// The key does not exist
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }

    /// A conditional fetch found the stored clock unchanged
    pub fn is_unchanged(&self) -> bool {
        self.unchanged
    }

    /// Whether the store sent a vector clock
    pub fn has_vclock(&self) -> bool {
        self.vclock.is_some()
    }

    /// Vector clock of the stored value
    pub fn vclock(&self) -> Option<&VClock> {
        self.vclock.as_ref()
    }

    /// Whether at least one value came back
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Converted values, one per sibling
    pub fn value(&self) -> Option<&[T]> {
        self.value.as_deref()
    }

    /// Consume the response, returning the converted values
    pub fn into_value(self) -> Option<Vec<T>> {
        self.value
    }
}
