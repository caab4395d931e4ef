//! Fetch Command Tests
//!
//! End-to-end tests for the public `ringkv` API:
//! - fetch / fetch_with factories and typed options
//! - option translation into the stock FetchOperation
//! - response shaping (not-found, unchanged, siblings, vclock)
//! - failure propagation from transport and converter
//! - configured defaults from ringkv.toml

mod common;

mod config_defaults;
mod error_handling;
mod scenarios;
