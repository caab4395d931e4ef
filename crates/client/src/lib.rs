//! # ringkv client
//!
//! Typed fetch command for a replicated key-value store.
//!
//! This crate shapes requests and responses; it does not talk to the
//! network. It provides:
//! - [`FetchValue`] - the fetch command, built with [`fetch`] / [`fetch_with`]
//! - [`FetchOption`] / [`OptionSet`] - typed per-request options
//! - [`Executor`] / [`OperationBuilder`] - the transport boundary
//! - [`Converter`] - turns stored objects into domain values
//! - [`FetchResponse`] - converted values plus store metadata
//!
//! ## Quick Start
//!
//! ```text
//! use ringkv_client::{fetch, fetch_with, JsonConverter, Location, Quorum};
//!
//! // Raw objects
//! let response = fetch(Location::in_default_type("users", "42"))
//!     .with_r(Quorum::Quorum)
//!     .with_timeout(5000)
//!     .execute(&cluster)?;
//!
//! // Domain objects
//! let users = fetch_with(location, JsonConverter::<User>::new())
//!     .with_notfound_ok(true)
//!     .execute(&cluster)?;
//! ```
//!
//! ## Request flow
//!
//! | Step | Module |
//! |------|--------|
//! | options collected | `option` |
//! | operation built | `bridge`, `operation` |
//! | operation sent | `executor` |
//! | objects converted | `convert` |
//! | response returned | `response` |

#![warn(missing_docs)]

mod bridge;
mod command;
mod config;
mod convert;
mod error;
mod executor;
mod operation;
mod option;
mod response;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use bridge::build_operation;
pub use command::{fetch, fetch_with, FetchValue, KvCommand, SharedConverter};
pub use config::{FetchConfig, FetchDefaults, CONFIG_FILE_NAME};
pub use convert::{Converter, JsonConverter, PassThroughConverter};
pub use error::{ConversionError, Error, TransportError, TransportErrorKind};
pub use executor::Executor;
pub use operation::{FetchOperation, FetchOperationBuilder, OperationBuilder, RawFetchResponse};
pub use option::{FetchOption, FetchOptionKind, OptionSet};
pub use response::FetchResponse;

// Re-export value types so users don't need ringkv-core directly
pub use ringkv_core::{
    KvObject, Location, Quorum, VClock, DEFAULT_BUCKET_TYPE, DEFAULT_CONTENT_TYPE,
};

/// Result type for command operations
pub type Result<T> = std::result::Result<T, Error>;
