//! The fetch command.
//!
//! A [`FetchValue`] is bound to one [`Location`] and one converter, collects
//! options through a fluent API, and runs against any [`Executor`]:
//!
//! ```ignore
//! use ringkv::{fetch, Location, Quorum};
//!
//! let response = fetch(Location::in_default_type("users", "42"))
//!     .with_r(Quorum::Count(2))
//!     .with_timeout(5000)
//!     .execute(&cluster)?;
//! ```
//!
//! Executing does not modify the command, so the same command can be run
//! again; each run makes exactly one executor call.

use std::fmt;
use std::sync::Arc;

use ringkv_core::{KvObject, Location, Quorum, VClock};

use crate::bridge::build_operation;
use crate::config::FetchDefaults;
use crate::convert::{convert_all, Converter, PassThroughConverter};
use crate::executor::Executor;
use crate::option::{FetchOption, OptionSet};
use crate::response::FetchResponse;
use crate::Result;

/// A request that runs against an [`Executor`] and produces a typed response.
pub trait KvCommand {
    /// What a successful execution returns
    type Response;

    /// Run the command once.
    fn execute<E: Executor>(&self, executor: &E) -> Result<Self::Response>;
}

/// Converter shared between commands.
pub type SharedConverter<T> = Arc<dyn Converter<T> + Send + Sync>;

/// Fetch the value stored at a location.
///
/// `T` is the type the converter produces; [`fetch`] uses
/// [`KvObject`] with a pass-through converter.
///
/// # Thread Safety
///
/// Options are added through `self`-consuming methods, so a command is
/// only mutated by its single owner. A built command is `Send + Sync` and
/// may be executed from several threads through `&self`.
pub struct FetchValue<T> {
    location: Location,
    converter: SharedConverter<T>,
    options: OptionSet,
}

/// Fetch raw [`KvObject`]s from `location`.
pub fn fetch(location: Location) -> FetchValue<KvObject> {
    FetchValue::new(location)
}

/// Fetch from `location`, converting each object with `converter`.
pub fn fetch_with<T, C>(location: Location, converter: C) -> FetchValue<T>
where
    C: Converter<T> + Send + Sync + 'static,
{
    FetchValue::with_shared_converter(location, Arc::new(converter))
}

impl FetchValue<KvObject> {
    /// Create a command returning raw objects
    pub fn new(location: Location) -> Self {
        Self::with_shared_converter(location, Arc::new(PassThroughConverter))
    }
}

impl<T> FetchValue<T> {
    /// Create a command using a converter shared with other commands
    pub fn with_shared_converter(location: Location, converter: SharedConverter<T>) -> Self {
        Self {
            location,
            converter,
            options: OptionSet::new(),
        }
    }

    /// Target location
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Options set so far
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Set an option, replacing any earlier value of the same kind
    pub fn with_option(mut self, option: FetchOption) -> Self {
        self.options.put(option);
        self
    }

    /// Read quorum
    pub fn with_r(self, r: Quorum) -> Self {
        self.with_option(FetchOption::R(r))
    }

    /// Primary-read quorum
    pub fn with_pr(self, pr: Quorum) -> Self {
        self.with_option(FetchOption::Pr(pr))
    }

    /// Replication factor override.
    ///
    /// Zero is sent to the store as-is; only configured defaults are checked.
    pub fn with_n_val(self, n_val: u32) -> Self {
        self.with_option(FetchOption::NVal(n_val))
    }

    /// Operation deadline in milliseconds, enforced by the transport
    pub fn with_timeout(self, timeout_ms: u32) -> Self {
        self.with_option(FetchOption::Timeout(timeout_ms))
    }

    /// Return the vector clock of tombstones
    pub fn with_deleted_vclock(self, enabled: bool) -> Self {
        self.with_option(FetchOption::DeletedVClock(enabled))
    }

    /// Fetch metadata only
    pub fn with_head(self, enabled: bool) -> Self {
        self.with_option(FetchOption::Head(enabled))
    }

    /// Reduced quorum semantics
    pub fn with_basic_quorum(self, enabled: bool) -> Self {
        self.with_option(FetchOption::BasicQuorum(enabled))
    }

    /// Only return a body if the stored clock differs from `vclock`
    pub fn with_if_modified(self, vclock: VClock) -> Self {
        self.with_option(FetchOption::IfModified(vclock))
    }

    /// Allow fallback nodes to satisfy quorum
    pub fn with_sloppy_quorum(self, enabled: bool) -> Self {
        self.with_option(FetchOption::SloppyQuorum(enabled))
    }

    /// Count a replica's not-found toward quorum
    pub fn with_notfound_ok(self, enabled: bool) -> Self {
        self.with_option(FetchOption::NotFoundOk(enabled))
    }

    /// Apply configured defaults for every kind not already set.
    ///
    /// Options set later still overwrite the defaults.
    pub fn with_defaults(mut self, defaults: &FetchDefaults) -> Self {
        self.options.fill_missing(&defaults.option_set());
        self
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Build the operation, send it, and convert the result.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` if the executor fails; no response is built
    /// - `Error::Conversion` if the converter rejects any object
    pub fn execute<E: Executor>(&self, executor: &E) -> Result<FetchResponse<T>> {
        let operation = build_operation::<E::Builder>(&self.location, &self.options);

        tracing::debug!(
            target: "ringkv::fetch",
            location = %self.location,
            options = self.options.len(),
            "Executing fetch"
        );

        let raw = executor.execute(operation).map_err(|e| {
            tracing::warn!(
                target: "ringkv::fetch",
                location = %self.location,
                error = %e,
                "Fetch failed"
            );
            e
        })?;

        tracing::debug!(
            target: "ringkv::fetch",
            location = %self.location,
            objects = raw.objects.len(),
            not_found = raw.not_found,
            unchanged = raw.unchanged,
            "Fetch returned"
        );

        let values = convert_all(&*self.converter, raw.objects)?;
        Ok(FetchResponse::new(
            raw.not_found,
            raw.unchanged,
            values,
            raw.vclock,
        ))
    }
}

impl<T> KvCommand for FetchValue<T> {
    type Response = FetchResponse<T>;

    fn execute<E: Executor>(&self, executor: &E) -> Result<FetchResponse<T>> {
        FetchValue::execute(self, executor)
    }
}

impl<T> Clone for FetchValue<T> {
    fn clone(&self) -> Self {
        Self {
            location: self.location.clone(),
            converter: Arc::clone(&self.converter),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for FetchValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchValue")
            .field("location", &self.location)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
