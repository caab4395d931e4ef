//! Command-level tests driven through recording fakes.
