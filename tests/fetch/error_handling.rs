//! Error Handling Tests
//!
//! Collaborator failures surface unchanged; not-found is not an error.

use crate::common::*;
use ringkv::{fetch, fetch_with, ConversionError, Error, KvObject, TransportErrorKind};

#[test]
fn unavailable_cluster_returns_transport_error() {
    let cluster = MemoryCluster::new().offline();

    let err = fetch(users_42()).execute(&cluster).unwrap_err();

    match err {
        Error::Transport(e) => assert_eq!(e.kind, TransportErrorKind::Unavailable),
        other => panic!("Expected Transport error, got {:?}", other),
    }
    assert_eq!(cluster.received().len(), 1);
}

#[test]
fn deadline_shorter_than_latency_times_out() {
    let cluster = MemoryCluster::new().with_latency(50);

    let err = fetch(users_42()).with_timeout(10).execute(&cluster).unwrap_err();

    match err {
        Error::Transport(e) => {
            assert_eq!(e.kind, TransportErrorKind::Timeout);
            assert!(e.message.contains("10ms"));
        }
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[test]
fn single_attempt_per_execute() {
    let cluster = MemoryCluster::new().offline();
    let cmd = fetch(users_42());

    assert!(cmd.execute(&cluster).is_err());
    assert!(cmd.execute(&cluster).is_err());

    assert_eq!(cluster.received().len(), 2);
}

#[test]
fn converter_failure_returns_conversion_error() {
    let cluster = cluster_with_user();

    let err = fetch_with(users_42(), |_: KvObject| {
        Err::<(), _>(ConversionError::new("schema v2 required"))
    })
    .execute(&cluster)
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "conversion failed for object 0: schema v2 required"
    );
}

#[test]
fn not_found_never_reaches_converter() {
    let cluster = MemoryCluster::new();

    let response = fetch_with(users_42(), |_: KvObject| {
        Err::<(), _>(ConversionError::new("must not be called"))
    })
    .execute(&cluster)
    .unwrap();

    assert!(response.is_not_found());
}

#[test]
fn invalid_quorum_becomes_invalid_option() {
    fn build(raw: i32) -> ringkv::Result<ringkv::FetchValue<KvObject>> {
        let r = ringkv::Quorum::new(raw)?;
        Ok(fetch(users_42()).with_r(r))
    }

    assert!(build(-3).is_ok());
    let err = build(-1).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { .. }));
}
