//! Wire-level fetch operation.
//!
//! The transport owns the concrete request format. This module defines the
//! capability the command needs from it:
//! - [`OperationBuilder`]: a builder with one setter per wire field
//! - [`RawFetchResponse`]: what the transport returns, before conversion
//!
//! [`FetchOperationBuilder`] / [`FetchOperation`] are the stock
//! implementation; a transport with its own request type implements
//! [`OperationBuilder`] for it instead.

use serde::{Deserialize, Serialize};

use ringkv_core::{KvObject, VClock};

/// Builder for a single fetch request.
///
/// Bucket and key are required at construction; everything else is
/// optional. Setters consume and return the builder.
pub trait OperationBuilder: Sized {
    /// The immutable request produced by [`build`](OperationBuilder::build)
    type Operation;

    /// Start a request for `key` in `bucket`
    fn new(bucket: &[u8], key: &[u8]) -> Self;

    /// Bucket type (namespace) of the bucket
    fn with_bucket_type(self, bucket_type: &[u8]) -> Self;

    /// Read quorum, as a wire integer
    fn with_r(self, r: i32) -> Self;

    /// Primary-read quorum, as a wire integer
    fn with_pr(self, pr: i32) -> Self;

    /// Replication factor override
    fn with_n_val(self, n_val: u32) -> Self;

    /// Deadline in milliseconds
    fn with_timeout(self, timeout_ms: u32) -> Self;

    /// Return the vector clock of tombstones
    fn with_return_deleted_vclock(self, enabled: bool) -> Self;

    /// Return metadata only
    fn with_head_only(self, enabled: bool) -> Self;

    /// Reduced quorum semantics
    fn with_basic_quorum(self, enabled: bool) -> Self;

    /// Skip the body if the stored clock equals `vclock`
    fn with_if_not_modified(self, vclock: Vec<u8>) -> Self;

    /// Allow fallback nodes to satisfy quorum
    fn with_sloppy_quorum(self, enabled: bool) -> Self;

    /// Count a replica's not-found toward quorum
    fn with_notfound_ok(self, enabled: bool) -> Self;

    /// Finish the request
    fn build(self) -> Self::Operation;
}

/// A fetch request ready to hand to the transport.
///
/// Fields left as `None` are not sent, and the store applies the bucket's
/// configured behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOperation {
    bucket_type: Option<Vec<u8>>,
    bucket: Vec<u8>,
    key: Vec<u8>,
    r: Option<i32>,
    pr: Option<i32>,
    n_val: Option<u32>,
    timeout_ms: Option<u32>,
    return_deleted_vclock: Option<bool>,
    head_only: Option<bool>,
    basic_quorum: Option<bool>,
    if_not_modified: Option<Vec<u8>>,
    sloppy_quorum: Option<bool>,
    notfound_ok: Option<bool>,
}

impl FetchOperation {
    /// Bucket type, if one was set
    pub fn bucket_type(&self) -> Option<&[u8]> {
        self.bucket_type.as_deref()
    }

    /// Bucket
    pub fn bucket(&self) -> &[u8] {
        &self.bucket
    }

    /// Key
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Read quorum
    pub fn r(&self) -> Option<i32> {
        self.r
    }

    /// Primary-read quorum
    pub fn pr(&self) -> Option<i32> {
        self.pr
    }

    /// Replication factor override
    pub fn n_val(&self) -> Option<u32> {
        self.n_val
    }

    /// Deadline in milliseconds
    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }

    /// Return-deleted-vclock flag
    pub fn return_deleted_vclock(&self) -> Option<bool> {
        self.return_deleted_vclock
    }

    /// Head-only flag
    pub fn head_only(&self) -> Option<bool> {
        self.head_only
    }

    /// Basic-quorum flag
    pub fn basic_quorum(&self) -> Option<bool> {
        self.basic_quorum
    }

    /// Conditional-fetch clock bytes
    pub fn if_not_modified(&self) -> Option<&[u8]> {
        self.if_not_modified.as_deref()
    }

    /// Sloppy-quorum flag
    pub fn sloppy_quorum(&self) -> Option<bool> {
        self.sloppy_quorum
    }

    /// Not-found-ok flag
    pub fn notfound_ok(&self) -> Option<bool> {
        self.notfound_ok
    }
}

/// Stock [`OperationBuilder`] producing a [`FetchOperation`].
#[derive(Debug, Clone)]
pub struct FetchOperationBuilder {
    op: FetchOperation,
}

impl OperationBuilder for FetchOperationBuilder {
    type Operation = FetchOperation;

    fn new(bucket: &[u8], key: &[u8]) -> Self {
        Self {
            op: FetchOperation {
                bucket_type: None,
                bucket: bucket.to_vec(),
                key: key.to_vec(),
                r: None,
                pr: None,
                n_val: None,
                timeout_ms: None,
                return_deleted_vclock: None,
                head_only: None,
                basic_quorum: None,
                if_not_modified: None,
                sloppy_quorum: None,
                notfound_ok: None,
            },
        }
    }

    fn with_bucket_type(mut self, bucket_type: &[u8]) -> Self {
        self.op.bucket_type = Some(bucket_type.to_vec());
        self
    }

    fn with_r(mut self, r: i32) -> Self {
        self.op.r = Some(r);
        self
    }

    fn with_pr(mut self, pr: i32) -> Self {
        self.op.pr = Some(pr);
        self
    }

    fn with_n_val(mut self, n_val: u32) -> Self {
        self.op.n_val = Some(n_val);
        self
    }

    fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.op.timeout_ms = Some(timeout_ms);
        self
    }

    fn with_return_deleted_vclock(mut self, enabled: bool) -> Self {
        self.op.return_deleted_vclock = Some(enabled);
        self
    }

    fn with_head_only(mut self, enabled: bool) -> Self {
        self.op.head_only = Some(enabled);
        self
    }

    fn with_basic_quorum(mut self, enabled: bool) -> Self {
        self.op.basic_quorum = Some(enabled);
        self
    }

    fn with_if_not_modified(mut self, vclock: Vec<u8>) -> Self {
        self.op.if_not_modified = Some(vclock);
        self
    }

    fn with_sloppy_quorum(mut self, enabled: bool) -> Self {
        self.op.sloppy_quorum = Some(enabled);
        self
    }

    fn with_notfound_ok(mut self, enabled: bool) -> Self {
        self.op.notfound_ok = Some(enabled);
        self
    }

    fn build(self) -> FetchOperation {
        self.op
    }
}

/// Transport result for a fetch, before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawFetchResponse {
    /// Stored objects; more than one when the key has siblings
    pub objects: Vec<KvObject>,
    /// The key does not exist
    pub not_found: bool,
    /// An if-modified fetch matched the stored clock
    pub unchanged: bool,
    /// Clock of the stored value, when the store sent one
    pub vclock: Option<VClock>,
}

impl RawFetchResponse {
    /// A successful read of one or more objects
    pub fn found(objects: Vec<KvObject>, vclock: Option<VClock>) -> Self {
        Self {
            objects,
            not_found: false,
            unchanged: false,
            vclock,
        }
    }

    /// The key does not exist
    pub fn not_found() -> Self {
        Self {
            not_found: true,
            ..Self::default()
        }
    }

    /// A conditional fetch whose value has not changed
    pub fn unchanged(vclock: Option<VClock>) -> Self {
        Self {
            unchanged: true,
            vclock,
            ..Self::default()
        }
    }
}
