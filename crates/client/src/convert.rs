//! Conversion from stored objects to domain values.
//!
//! A [`Converter`] turns one [`KvObject`] into a caller type. The command
//! applies it to every object in a response, in order.
//!
//! Provided converters:
//! - [`PassThroughConverter`]: returns the object unchanged
//! - [`JsonConverter`]: deserializes the value bytes as JSON
//! - any `Fn(KvObject) -> Result<T, ConversionError>` closure

use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

use ringkv_core::KvObject;

use crate::error::ConversionError;
use crate::{Error, Result};

/// Converts a stored object into a domain value.
pub trait Converter<T> {
    /// Convert one object
    fn convert(&self, object: KvObject) -> std::result::Result<T, ConversionError>;
}

impl<T, F> Converter<T> for F
where
    F: Fn(KvObject) -> std::result::Result<T, ConversionError>,
{
    fn convert(&self, object: KvObject) -> std::result::Result<T, ConversionError> {
        self(object)
    }
}

/// Converter that returns the stored object as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughConverter;

impl Converter<KvObject> for PassThroughConverter {
    fn convert(&self, object: KvObject) -> std::result::Result<KvObject, ConversionError> {
        Ok(object)
    }
}

/// Converter that parses the object's value as JSON into `T`.
pub struct JsonConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonConverter<T> {
    /// Create a JSON converter
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonConverter").finish()
    }
}

impl<T: DeserializeOwned> Converter<T> for JsonConverter<T> {
    fn convert(&self, object: KvObject) -> std::result::Result<T, ConversionError> {
        serde_json::from_slice(object.value()).map_err(|e| {
            ConversionError::new(format!(
                "invalid JSON ({}): {}",
                object.content_type(),
                e
            ))
        })
    }
}

/// Convert every object in order, stopping at the first failure.
pub(crate) fn convert_all<T, C>(converter: &C, objects: Vec<KvObject>) -> Result<Vec<T>>
where
    C: Converter<T> + ?Sized,
{
    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            converter
                .convert(object)
                .map_err(|source| Error::Conversion { index, source })
        })
        .collect()
}
