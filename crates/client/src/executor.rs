//! The transport boundary.
//!
//! An [`Executor`] sends one built operation to the cluster and blocks
//! until the raw response arrives or the attempt fails. Connection
//! handling, retries and deadline enforcement all live behind this trait;
//! commands make exactly one call per execution.

use crate::error::TransportError;
use crate::operation::{OperationBuilder, RawFetchResponse};

/// Sends fetch operations to the cluster.
///
/// # Thread Safety
///
/// Commands take the executor by shared reference, so an executor that is
/// `Sync` can serve many commands on many threads at once.
///
/// # Example
///
/// ```ignore
/// use ringkv::{Executor, FetchOperation, FetchOperationBuilder, RawFetchResponse, TransportError};
///
/// struct Cluster { /* connection pool */ }
///
/// impl Executor for Cluster {
///     type Builder = FetchOperationBuilder;
///
///     fn execute(&self, operation: FetchOperation) -> Result<RawFetchResponse, TransportError> {
///         self.send(operation)
///     }
/// }
/// ```
pub trait Executor {
    /// Builder for the operation type this executor accepts
    type Builder: OperationBuilder;

    /// Send `operation` and wait for the store's answer.
    fn execute(
        &self,
        operation: <Self::Builder as OperationBuilder>::Operation,
    ) -> Result<RawFetchResponse, TransportError>;
}

impl<E: Executor + ?Sized> Executor for &E {
    type Builder = E::Builder;

    fn execute(
        &self,
        operation: <Self::Builder as OperationBuilder>::Operation,
    ) -> Result<RawFetchResponse, TransportError> {
        (**self).execute(operation)
    }
}

impl<E: Executor + ?Sized> Executor for std::sync::Arc<E> {
    type Builder = E::Builder;

    fn execute(
        &self,
        operation: <Self::Builder as OperationBuilder>::Operation,
    ) -> Result<RawFetchResponse, TransportError> {
        (**self).execute(operation)
    }
}
