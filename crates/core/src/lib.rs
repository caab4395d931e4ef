//! Core value types for ringkv
//!
//! This crate defines the values exchanged between the client and the
//! transport layer:
//! - Location: bucket type + bucket + key addressing one item
//! - Quorum: replica count or symbolic quorum policy
//! - VClock: opaque vector clock returned with every fetch
//! - KvObject: the store's native value with its metadata
//! - Error: failures when building these values from untrusted input

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod location;
pub mod object;
pub mod quorum;
pub mod vclock;

pub use error::{Error, Result};
pub use location::{Location, DEFAULT_BUCKET_TYPE};
pub use object::{KvObject, DEFAULT_CONTENT_TYPE};
pub use quorum::Quorum;
pub use vclock::VClock;
