//! ringkv - typed fetch commands for a replicated key-value store
//!
//! ringkv turns a caller's intent ("fetch this key, with these quorum and
//! timeout settings") into a wire-level operation, hands it to a transport,
//! and turns the store's answer into typed values plus the vector clock and
//! not-found/unchanged flags.
//!
//! # Quick Start
//!
//! ```ignore
//! use ringkv::{fetch, Location, Quorum};
//!
//! let response = fetch(Location::in_default_type("users", "42"))
//!     .with_r(Quorum::Count(2))
//!     .with_timeout(5000)
//!     .execute(&cluster)?;
//!
//! if response.is_not_found() {
//!     println!("no such user");
//! }
//! ```
//!
//! # Architecture
//!
//! Commands run against an [`Executor`] supplied by the transport layer.
//! Value types live in `ringkv-core`; everything here is re-exported from
//! `ringkv-client`.

// Re-export the public API from ringkv-client
pub use ringkv_client::*;
