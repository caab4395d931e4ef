//! Fetch Scenarios
//!
//! Drives the public API against an in-memory cluster.

use crate::common::*;
use ringkv::{fetch, fetch_with, ConversionError, JsonConverter, KvObject, Location, Quorum, VClock};
use serde::Deserialize;

#[derive(Debug, PartialEq, Deserialize)]
struct User {
    name: String,
    age: u32,
}

#[test]
fn fetch_raw_object_with_vclock() {
    let cluster = cluster_with_user();

    let response = fetch(users_42())
        .with_r(Quorum::Count(2))
        .with_timeout(5000)
        .execute(&cluster)
        .unwrap();

    assert!(response.has_value());
    let objects = response.value().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].content_type(), "application/json");
    assert_eq!(response.vclock(), Some(&user_clock()));

    let op = cluster.last();
    assert_eq!(op.bucket(), b"users");
    assert_eq!(op.key(), b"42");
    assert_eq!(op.bucket_type(), Some(&b"default"[..]));
    assert_eq!(op.r(), Some(2));
    assert_eq!(op.timeout_ms(), Some(5000));
    assert!(op.pr().is_none());
}

#[test]
fn fetch_domain_object_through_json() {
    let cluster = cluster_with_user();

    let users = fetch_with(users_42(), JsonConverter::<User>::new())
        .execute(&cluster)
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(
        users,
        vec![User {
            name: "alice".to_string(),
            age: 30
        }]
    );
}

#[test]
fn missing_key_is_not_found() {
    let cluster = cluster_with_user();

    let response = fetch(Location::in_default_type("users", "999"))
        .with_notfound_ok(true)
        .execute(&cluster)
        .unwrap();

    assert!(response.is_not_found());
    assert!(!response.has_value());
    assert!(!response.has_vclock());
    assert_eq!(cluster.last().notfound_ok(), Some(true));
}

#[test]
fn bucket_type_is_part_of_the_address() {
    let cluster = cluster_with_user();

    let response = fetch(Location::new("maps", "users", "42"))
        .execute(&cluster)
        .unwrap();

    assert!(response.is_not_found());
}

#[test]
fn conditional_fetch_with_current_clock_is_unchanged() {
    let cluster = cluster_with_user();

    let response = fetch(users_42())
        .with_if_modified(user_clock())
        .execute(&cluster)
        .unwrap();

    assert!(response.is_unchanged());
    assert!(!response.has_value());
    assert_eq!(
        cluster.last().if_not_modified(),
        Some(user_clock().as_bytes())
    );
}

#[test]
fn conditional_fetch_with_stale_clock_returns_body() {
    let cluster = cluster_with_user();

    let response = fetch(users_42())
        .with_if_modified(VClock::new(b"stale".to_vec()))
        .execute(&cluster)
        .unwrap();

    assert!(!response.is_unchanged());
    assert!(response.has_value());
}

#[test]
fn head_only_omits_value_bytes() {
    let cluster = cluster_with_user();

    let response = fetch(users_42()).with_head(true).execute(&cluster).unwrap();

    let objects = response.into_value().unwrap();
    assert!(objects[0].value().is_empty());
    assert_eq!(objects[0].vtag(), Some("v1"));
}

#[test]
fn siblings_come_back_in_store_order() {
    let mut cluster = MemoryCluster::new();
    let location = Location::in_default_type("carts", "7");
    cluster.insert(
        &location,
        vec![KvObject::new("[1]"), KvObject::new("[1,2]"), KvObject::new("[3]")],
        VClock::new(vec![7]),
    );

    let lens = fetch_with(location, |o: KvObject| {
        serde_json::from_slice::<Vec<u32>>(o.value())
            .map(|items| items.len())
            .map_err(|e| ConversionError::new(e.to_string()))
    })
    .execute(&cluster)
    .unwrap()
    .into_value()
    .unwrap();

    assert_eq!(lens, vec![1, 2, 1]);
}

#[test]
fn every_option_reaches_the_operation() {
    let cluster = cluster_with_user();

    fetch(users_42())
        .with_r(Quorum::One)
        .with_pr(Quorum::Quorum)
        .with_n_val(3)
        .with_timeout(2000)
        .with_deleted_vclock(true)
        .with_head(false)
        .with_basic_quorum(true)
        .with_if_modified(VClock::new(vec![1, 2, 3]))
        .with_sloppy_quorum(false)
        .with_notfound_ok(true)
        .execute(&cluster)
        .unwrap();

    let op = cluster.last();
    assert_eq!(op.r(), Some(-2));
    assert_eq!(op.pr(), Some(-3));
    assert_eq!(op.n_val(), Some(3));
    assert_eq!(op.timeout_ms(), Some(2000));
    assert_eq!(op.return_deleted_vclock(), Some(true));
    assert_eq!(op.head_only(), Some(false));
    assert_eq!(op.basic_quorum(), Some(true));
    assert_eq!(op.if_not_modified(), Some(&[1u8, 2, 3][..]));
    assert_eq!(op.sloppy_quorum(), Some(false));
    assert_eq!(op.notfound_ok(), Some(true));
}
