//! Point writes and reads through the engine

use crate::common::*;
use bitestore::AddressError;

#[test]
fn put_get_contains() {
    let (engine, _store) = memory_engine();
    assert!(!engine.contains(ObjectKind::Bite, "c1", 1).unwrap());

    engine.put(ObjectKind::Bite, "c1", 1, b"hello".to_vec()).unwrap();
    assert!(engine.contains(ObjectKind::Bite, "c1", 1).unwrap());
    assert_eq!(engine.get(ObjectKind::Bite, "c1", 1).unwrap(), b"hello");
}

#[test]
fn empty_payload_is_stored() {
    let (engine, _store) = memory_engine();
    engine.put(ObjectKind::User, "u1", 0, Vec::new()).unwrap();
    assert_eq!(engine.get(ObjectKind::User, "u1", 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn missing_bite_reports_its_address() {
    let (engine, _store) = memory_engine();
    let err = engine.get(ObjectKind::Bite, "c1", 42).unwrap_err();
    assert_eq!(err.reason_code(), "not_found");
    match err {
        Error::NotFound(addr) => assert_eq!(addr.to_string(), "bite+c1@42"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn overwrite_is_last_write_wins_by_default() {
    let (engine, store) = memory_engine();
    engine.put(ObjectKind::Bite, "c1", 1, b"a".to_vec()).unwrap();
    engine.put(ObjectKind::Bite, "c1", 1, b"b".to_vec()).unwrap();
    assert_eq!(engine.get(ObjectKind::Bite, "c1", 1).unwrap(), b"b");
    assert_eq!(store.len(), 1);
}

#[test]
fn reject_policy_keeps_first_payload() {
    let engine = engine_with(EngineConfig {
        write_policy: WritePolicy::Reject,
        ..EngineConfig::default()
    });
    engine.put(ObjectKind::Bite, "c1", 1, b"a".to_vec()).unwrap();

    let err = engine.put(ObjectKind::Bite, "c1", 1, b"b".to_vec()).unwrap_err();
    assert_eq!(err.reason_code(), "already_exists");
    assert_eq!(engine.get(ObjectKind::Bite, "c1", 1).unwrap(), b"a");

    // Other positions are unaffected
    engine.put(ObjectKind::Bite, "c1", 2, b"c".to_vec()).unwrap();
}

#[test]
fn reject_policy_from_toml() {
    let config = EngineConfig::from_toml_str("write_policy = \"reject\"\n").unwrap();
    let engine = engine_with(config);
    engine.put(ObjectKind::User, "u", 9, vec![1]).unwrap();
    assert!(matches!(
        engine.put(ObjectKind::User, "u", 9, vec![2]),
        Err(Error::AlreadyExists(_))
    ));
}

#[test]
fn limits_are_enforced_before_writing() {
    let engine = engine_with(EngineConfig {
        max_conversation_bytes: 8,
        max_payload_bytes: 4,
        ..EngineConfig::default()
    });

    let err = engine
        .put(ObjectKind::Bite, "nine-char", 1, vec![])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAddress(AddressError::ConversationTooLong { actual: 9, max: 8 })
    ));

    let err = engine.put(ObjectKind::Bite, "c1", 1, vec![0; 5]).unwrap_err();
    assert_eq!(err.reason_code(), "payload_too_large");
    assert!(!engine.contains(ObjectKind::Bite, "c1", 1).unwrap());
}

#[test]
fn rejected_identifiers_never_reach_the_store() {
    let (engine, store) = memory_engine();
    for conv in ["", "a/b", "a+b", "a@b", "a b"] {
        assert!(engine.put(ObjectKind::Bite, conv, 1, vec![]).is_err());
    }
    assert!(store.is_empty());
}

#[test]
fn stored_keys_decode_to_their_address() {
    let (engine, store) = memory_engine();
    engine.put(ObjectKind::User, "u-7", 300, vec![]).unwrap();

    let key = Address::new(ObjectKind::User, "u-7", 300).key().unwrap();
    assert_eq!(store.get(&key).unwrap(), Some(Vec::new()));
    assert_eq!(
        decode_key(&key).unwrap(),
        Address::new(ObjectKind::User, "u-7", 300)
    );
}
