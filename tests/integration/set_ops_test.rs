// tests/integration/set_ops_test.rs

//! Integration tests for the typed set-operations surface.
//! Interaction tests verify exactly which command and arguments the adapter
//! issues; scenario tests run real set algebra against the in-memory fake.

use super::test_helpers::{bulk, bulk_array, init_tracing, FakeServer, ScriptedExecutor};
use bytes::Bytes;
use futures::TryStreamExt;
use redset::config::AdapterConfig;
use redset::core::protocol::Reply;
use redset::{RedSetError, SetOperations};
use std::sync::Arc;

fn s(v: &str) -> String {
    v.to_string()
}

fn b(v: &str) -> Bytes {
    Bytes::copy_from_slice(v.as_bytes())
}

fn scripted() -> (Arc<ScriptedExecutor>, SetOperations<String, String>) {
    init_tracing();
    let executor = Arc::new(ScriptedExecutor::new());
    let ops = SetOperations::strings(executor.clone());
    (executor, ops)
}

fn fake() -> (Arc<FakeServer>, SetOperations<String, String>) {
    init_tracing();
    let server = Arc::new(FakeServer::new());
    let ops = SetOperations::strings(server.clone());
    (server, ops)
}

// ===== Mutation =====

#[tokio::test]
async fn add_issues_sadd_and_decodes_count() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(1));

    let added = ops.add(&s("foo"), &[s("bar"), s("baz")]).await.unwrap();

    assert_eq!(added, 1);
    let (name, args) = executor.single_call();
    assert_eq!(name, "sadd");
    assert_eq!(args, vec![b("foo"), b("bar"), b("baz")]);
}

#[tokio::test]
async fn add_with_no_members_is_a_local_noop() {
    let (executor, ops) = scripted();

    let added = ops.add(&s("foo"), &[]).await.unwrap();

    assert_eq!(added, 0);
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn remove_issues_srem() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(2));

    let removed = ops.remove(&s("foo"), &[s("bar"), s("baz")]).await.unwrap();

    assert_eq!(removed, 2);
    let (name, args) = executor.single_call();
    assert_eq!(name, "srem");
    assert_eq!(args, vec![b("foo"), b("bar"), b("baz")]);
}

#[tokio::test]
async fn remove_of_absent_members_is_zero_not_an_error() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(0));

    assert_eq!(ops.remove(&s("foo"), &[s("nope")]).await.unwrap(), 0);
    assert_eq!(executor.call_count(), 1);
}

// ===== Extraction =====

#[tokio::test]
async fn pop_returns_a_member() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk("bar"));

    assert_eq!(ops.pop(&s("foo")).await.unwrap(), Some(s("bar")));
    let (name, args) = executor.single_call();
    assert_eq!(name, "spop");
    assert_eq!(args, vec![b("foo")]);
}

#[tokio::test]
async fn pop_on_empty_set_is_absent_with_one_command() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Null);

    assert_eq!(ops.pop(&s("foo")).await.unwrap(), None);
    assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn pop_count_issues_spop_with_count() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["bar"]));

    let popped = ops.pop_count(&s("foo"), 2).await.unwrap();

    assert_eq!(popped, vec![s("bar")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "spop");
    assert_eq!(args, vec![b("foo"), b("2")]);
}

#[tokio::test]
async fn random_member_absent_on_missing_key() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Null);

    assert_eq!(ops.random_member(&s("foo")).await.unwrap(), None);
    let (name, args) = executor.single_call();
    assert_eq!(name, "srandmember");
    assert_eq!(args, vec![b("foo")]);
}

#[tokio::test]
async fn distinct_random_members_encodes_positive_count() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["bar"]));

    let members = ops.distinct_random_members(&s("foo"), 3).await.unwrap();

    assert_eq!(members, vec![s("bar")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "srandmember");
    assert_eq!(args, vec![b("foo"), b("3")]);
}

#[tokio::test]
async fn random_members_encodes_negative_count_for_replacement_sampling() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["bar", "bar"]));

    let members = ops.random_members(&s("foo"), 2).await.unwrap();

    assert_eq!(members, vec![s("bar"), s("bar")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "srandmember");
    assert_eq!(args, vec![b("foo"), b("-2")]);
}

// ===== Predicates =====

#[tokio::test]
async fn size_issues_scard() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(1));

    assert_eq!(ops.size(&s("foo")).await.unwrap(), 1);
    let (name, args) = executor.single_call();
    assert_eq!(name, "scard");
    assert_eq!(args, vec![b("foo")]);
}

#[tokio::test]
async fn is_member_decodes_boolean() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(1));

    assert!(ops.is_member(&s("foo"), &s("bar")).await.unwrap());
    let (name, args) = executor.single_call();
    assert_eq!(name, "sismember");
    assert_eq!(args, vec![b("foo"), b("bar")]);
}

#[tokio::test]
async fn is_members_preserves_query_order() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Array(vec![Reply::Integer(1), Reply::Integer(0)]));

    let flags = ops
        .is_members(&s("foo"), &[s("bar"), s("nope")])
        .await
        .unwrap();

    assert_eq!(flags, vec![true, false]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "smismember");
    assert_eq!(args, vec![b("foo"), b("bar"), b("nope")]);
}

// ===== Transfer =====

#[tokio::test]
async fn move_member_issues_smove() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(1));

    assert!(ops.move_member(&s("from"), &s("to"), &s("bar")).await.unwrap());
    let (name, args) = executor.single_call();
    assert_eq!(name, "smove");
    assert_eq!(args, vec![b("from"), b("to"), b("bar")]);
}

#[tokio::test]
async fn move_member_false_when_member_not_in_source() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(0));

    assert!(!ops.move_member(&s("from"), &s("to"), &s("bar")).await.unwrap());
}

// ===== Multi-key combination =====

#[tokio::test]
async fn intersect_streams_members_in_key_order() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["baz"]));

    let members: Vec<String> = ops
        .intersect(&[s("foo"), s("bar")])
        .try_collect()
        .await
        .unwrap();

    assert_eq!(members, vec![s("baz")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "sinter");
    assert_eq!(args, vec![b("foo"), b("bar")]);
}

#[tokio::test]
async fn union_streams_members() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["baz"]));

    let members: Vec<String> = ops
        .union(&[s("foo"), s("bar")])
        .try_collect()
        .await
        .unwrap();

    assert_eq!(members, vec![s("baz")]);
    assert_eq!(executor.single_call().0, "sunion");
}

#[tokio::test]
async fn difference_keeps_the_base_key_first() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["baz"]));

    let members: Vec<String> = ops
        .difference(&[s("foo"), s("bar")])
        .try_collect()
        .await
        .unwrap();

    assert_eq!(members, vec![s("baz")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "sdiff");
    assert_eq!(args, vec![b("foo"), b("bar")]);
}

#[tokio::test]
async fn combination_with_no_keys_fails_before_any_network_call() {
    let (executor, ops) = scripted();

    let err = ops
        .intersect(&[])
        .try_collect::<Vec<String>>()
        .await
        .unwrap_err();

    assert!(matches!(err, RedSetError::InvalidRequest(_)));
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn combination_streams_are_lazy_until_polled() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["baz"]));

    let stream = ops.union(&[s("foo")]);
    assert_eq!(executor.call_count(), 0);

    let members: Vec<String> = stream.try_collect().await.unwrap();
    assert_eq!(members, vec![s("baz")]);
    assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn key_count_circuit_breaker_rejects_oversized_requests() {
    init_tracing();
    let executor = Arc::new(ScriptedExecutor::new());
    let config = AdapterConfig {
        max_set_operation_keys: 2,
        ..AdapterConfig::default()
    };
    let ops: SetOperations<String, String> = SetOperations::with_config(
        executor.clone(),
        Arc::new(redset::StringCodec),
        Arc::new(redset::StringCodec),
        config,
    );

    let err = ops
        .union(&[s("a"), s("b"), s("c")])
        .try_collect::<Vec<String>>()
        .await
        .unwrap_err();

    assert!(matches!(err, RedSetError::InvalidRequest(_)));
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn intersect_store_writes_destination_first() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(3));

    let stored = ops
        .intersect_store(&[s("foo"), s("bar")], &s("dest"))
        .await
        .unwrap();

    assert_eq!(stored, 3);
    let (name, args) = executor.single_call();
    assert_eq!(name, "sinterstore");
    assert_eq!(args, vec![b("dest"), b("foo"), b("bar")]);
}

#[tokio::test]
async fn union_store_and_difference_store_issue_their_commands() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(3));
    executor.enqueue(Reply::Integer(1));

    assert_eq!(
        ops.union_store(&[s("foo"), s("bar")], &s("dest")).await.unwrap(),
        3
    );
    assert_eq!(
        ops.difference_store(&[s("foo"), s("bar")], &s("dest"))
            .await
            .unwrap(),
        1
    );

    let calls = executor.calls();
    assert_eq!(calls[0].0, "sunionstore");
    assert_eq!(calls[1].0, "sdiffstore");
    assert_eq!(calls[1].1, vec![b("dest"), b("foo"), b("bar")]);
}

// ===== Enumeration =====

#[tokio::test]
async fn members_streams_the_whole_set() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk_array(&["bar", "baz"]));

    let members: Vec<String> = ops.members(&s("foo")).try_collect().await.unwrap();

    assert_eq!(members, vec![s("bar"), s("baz")]);
    let (name, args) = executor.single_call();
    assert_eq!(name, "smembers");
    assert_eq!(args, vec![b("foo")]);
}

// ===== Destruction =====

#[tokio::test]
async fn delete_true_when_key_existed() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(1));

    assert!(ops.delete(&s("foo")).await.unwrap());
    let (name, args) = executor.single_call();
    assert_eq!(name, "del");
    assert_eq!(args, vec![b("foo")]);
}

#[tokio::test]
async fn delete_false_when_key_was_missing() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Integer(0));

    assert!(!ops.delete(&s("foo")).await.unwrap());
}

// ===== Error propagation =====

#[tokio::test]
async fn server_error_reply_surfaces_as_server_error() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::Error(
        "WRONGTYPE Operation against a key holding the wrong kind of value".to_string(),
    ));

    let err = ops.size(&s("foo")).await.unwrap_err();
    assert!(matches!(err, RedSetError::Server(msg) if msg.starts_with("WRONGTYPE")));
}

#[tokio::test]
async fn transport_failure_propagates_unchanged_with_no_retry() {
    let (executor, ops) = scripted();
    executor.enqueue_err(RedSetError::Transport("connection reset".to_string()));

    let err = ops.size(&s("foo")).await.unwrap_err();
    assert_eq!(err, RedSetError::Transport("connection reset".to_string()));
    assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn unexpected_reply_shape_is_a_protocol_error() {
    let (executor, ops) = scripted();
    executor.enqueue(bulk("not-an-integer"));

    let err = ops.size(&s("foo")).await.unwrap_err();
    assert!(matches!(err, RedSetError::UnexpectedReply { expected, .. } if expected == "integer"));
}

#[tokio::test]
async fn invalid_utf8_member_is_a_codec_error() {
    let (executor, ops) = scripted();
    executor.enqueue(Reply::BulkString(Bytes::from_static(&[0xff, 0xfe])));

    let err = ops.pop(&s("foo")).await.unwrap_err();
    assert!(matches!(err, RedSetError::Codec(_)));
}

// ===== End-to-end scenarios against the in-memory fake =====

#[tokio::test]
async fn add_size_membership_delete_scenario() {
    let (server, ops) = fake();
    server.seed("foo", &["bar", "baz"]);

    assert_eq!(ops.add(&s("foo"), &[s("qux")]).await.unwrap(), 1);
    assert_eq!(ops.size(&s("foo")).await.unwrap(), 3);
    assert!(ops.is_member(&s("foo"), &s("qux")).await.unwrap());
    assert!(ops.delete(&s("foo")).await.unwrap());
    assert_eq!(ops.size(&s("foo")).await.unwrap(), 0);
}

#[tokio::test]
async fn intersect_store_scenario_matches_mathematical_intersection() {
    let (_, ops) = fake();
    ops.add(&s("foo"), &[s("x"), s("y")]).await.unwrap();
    ops.add(&s("bar"), &[s("y"), s("z")]).await.unwrap();

    let stored = ops
        .intersect_store(&[s("foo"), s("bar")], &s("dest"))
        .await
        .unwrap();
    assert_eq!(stored, 1);

    let members: Vec<String> = ops.members(&s("dest")).try_collect().await.unwrap();
    assert_eq!(members, vec![s("y")]);
}

#[tokio::test]
async fn union_is_duplicate_free_and_order_insensitive() {
    let (_, ops) = fake();
    ops.add(&s("a"), &[s("one"), s("two")]).await.unwrap();
    ops.add(&s("b"), &[s("two"), s("three")]).await.unwrap();

    let mut forward: Vec<String> = ops.union(&[s("a"), s("b")]).try_collect().await.unwrap();
    let mut reverse: Vec<String> = ops.union(&[s("b"), s("a")]).try_collect().await.unwrap();
    forward.sort();
    reverse.sort();

    assert_eq!(forward, vec![s("one"), s("three"), s("two")]);
    assert_eq!(forward, reverse);
}

#[tokio::test]
async fn difference_depends_on_key_order() {
    let (_, ops) = fake();
    ops.add(&s("a"), &[s("one"), s("two")]).await.unwrap();
    ops.add(&s("b"), &[s("two"), s("three")]).await.unwrap();

    let a_minus_b: Vec<String> = ops
        .difference(&[s("a"), s("b")])
        .try_collect()
        .await
        .unwrap();
    let b_minus_a: Vec<String> = ops
        .difference(&[s("b"), s("a")])
        .try_collect()
        .await
        .unwrap();

    assert_eq!(a_minus_b, vec![s("one")]);
    assert_eq!(b_minus_a, vec![s("three")]);
}

#[tokio::test]
async fn pop_count_never_exceeds_the_set_size() {
    let (_, ops) = fake();
    ops.add(&s("foo"), &[s("one"), s("two")]).await.unwrap();

    let popped = ops.pop_count(&s("foo"), 5).await.unwrap();

    assert_eq!(popped.len(), 2);
    assert_eq!(ops.size(&s("foo")).await.unwrap(), 0);
}

#[tokio::test]
async fn move_member_transfers_between_sets() {
    let (_, ops) = fake();
    ops.add(&s("src"), &[s("bar")]).await.unwrap();

    assert!(ops.move_member(&s("src"), &s("dst"), &s("bar")).await.unwrap());
    assert!(!ops.is_member(&s("src"), &s("bar")).await.unwrap());
    assert!(ops.is_member(&s("dst"), &s("bar")).await.unwrap());

    // Second move of the same member finds nothing in the source.
    assert!(!ops.move_member(&s("src"), &s("dst"), &s("bar")).await.unwrap());
}
