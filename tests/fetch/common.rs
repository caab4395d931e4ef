//! Common test utilities for fetch tests

use parking_lot::Mutex;
use std::collections::BTreeMap;

use ringkv::{
    Executor, FetchOperation, FetchOperationBuilder, KvObject, Location, RawFetchResponse,
    TransportError, VClock, DEFAULT_BUCKET_TYPE,
};

type StoreKey = (Vec<u8>, Vec<u8>, Vec<u8>);

/// A single-node in-memory store answering fetch operations the way the
/// cluster would: conditional fetches, head-only reads and deadlines.
pub struct MemoryCluster {
    data: BTreeMap<StoreKey, (Vec<KvObject>, VClock)>,
    /// Simulated service time, compared against the operation's timeout
    latency_ms: u32,
    available: bool,
    received: Mutex<Vec<FetchOperation>>,
}

impl MemoryCluster {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
            latency_ms: 1,
            available: true,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn offline(mut self) -> Self {
        self.available = false;
        self
    }

    /// Store `objects` (siblings) at `location` under `vclock`
    pub fn insert(&mut self, location: &Location, objects: Vec<KvObject>, vclock: VClock) {
        self.data.insert(
            (
                location.bucket_type().to_vec(),
                location.bucket().to_vec(),
                location.key().to_vec(),
            ),
            (objects, vclock),
        );
    }

    /// Operations received so far
    pub fn received(&self) -> Vec<FetchOperation> {
        self.received.lock().clone()
    }

    /// The most recent operation
    pub fn last(&self) -> FetchOperation {
        self.received().pop().expect("no operation received")
    }
}

impl Executor for MemoryCluster {
    type Builder = FetchOperationBuilder;

    fn execute(&self, op: FetchOperation) -> Result<RawFetchResponse, TransportError> {
        self.received.lock().push(op.clone());

        if !self.available {
            return Err(TransportError::unavailable("no primary or fallback nodes"));
        }
        if let Some(timeout) = op.timeout_ms() {
            if timeout < self.latency_ms {
                return Err(TransportError::timeout(format!(
                    "deadline of {}ms elapsed",
                    timeout
                )));
            }
        }

        let bucket_type = op
            .bucket_type()
            .unwrap_or(DEFAULT_BUCKET_TYPE.as_bytes())
            .to_vec();
        let key = (bucket_type, op.bucket().to_vec(), op.key().to_vec());

        let Some((objects, vclock)) = self.data.get(&key) else {
            return Ok(RawFetchResponse::not_found());
        };

        if op.if_not_modified() == Some(vclock.as_bytes()) {
            return Ok(RawFetchResponse::unchanged(Some(vclock.clone())));
        }

        let objects = if op.head_only() == Some(true) {
            objects
                .iter()
                .map(|o| {
                    let mut head = KvObject::new(Vec::new()).with_content_type(o.content_type());
                    if let Some(vtag) = o.vtag() {
                        head = head.with_vtag(vtag);
                    }
                    head
                })
                .collect()
        } else {
            objects.clone()
        };

        Ok(RawFetchResponse::found(objects, Some(vclock.clone())))
    }
}

/// A cluster holding one JSON user at default/users/42
pub fn cluster_with_user() -> MemoryCluster {
    let mut cluster = MemoryCluster::new();
    cluster.insert(
        &users_42(),
        vec![KvObject::new(r#"{"name":"alice","age":30}"#)
            .with_content_type("application/json")
            .with_vtag("v1")],
        user_clock(),
    );
    cluster
}

pub fn users_42() -> Location {
    Location::in_default_type("users", "42")
}

pub fn user_clock() -> VClock {
    VClock::new(b"a85hYGBgzGDKBVIcypz/fgaUHjmdwZTImMfKwNN5".to_vec())
}
