//! Key codec properties
//!
//! For any valid address:
//! - decoding an encoded key yields the address back
//! - key order within a conversation follows position order
//! - every key of a conversation starts with its prefix, and no key of a
//!   different conversation or kind does

use crate::common::*;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = ObjectKind> {
    prop::sample::select(ObjectKind::ALL.to_vec())
}

fn arb_conversation() -> impl Strategy<Value = String> {
    "[A-Za-z0-9-]{1,24}"
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        kind in arb_kind(),
        conversation in arb_conversation(),
        position in any::<u64>(),
    ) {
        let key = encode_key(kind, &conversation, position).unwrap();
        let addr = decode_key(&key).unwrap();
        prop_assert_eq!(addr, Address::new(kind, conversation, position));
    }

    #[test]
    fn key_order_follows_position_order(
        kind in arb_kind(),
        conversation in arb_conversation(),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let ka = encode_key(kind, &conversation, a).unwrap();
        let kb = encode_key(kind, &conversation, b).unwrap();
        prop_assert_eq!(ka.cmp(&kb), a.cmp(&b));
    }

    #[test]
    fn prefix_isolates_conversations(
        kind in arb_kind(),
        conversation in arb_conversation(),
        other in arb_conversation(),
        position in any::<u64>(),
    ) {
        let prefix = encode_prefix(kind, &conversation).unwrap();
        let own = encode_key(kind, &conversation, position).unwrap();
        prop_assert!(own.starts_with(&prefix));

        let foreign = encode_key(kind, &other, position).unwrap();
        prop_assert_eq!(foreign.starts_with(&prefix), other == conversation);
    }

    #[test]
    fn prefix_isolates_kinds(conversation in arb_conversation(), position in any::<u64>()) {
        let bite_prefix = encode_prefix(ObjectKind::Bite, &conversation).unwrap();
        let user_key = encode_key(ObjectKind::User, &conversation, position).unwrap();
        prop_assert!(!user_key.starts_with(&bite_prefix));
    }

    #[test]
    fn key_length_is_prefix_plus_eight(
        kind in arb_kind(),
        conversation in arb_conversation(),
        position in any::<u64>(),
    ) {
        let prefix = encode_prefix(kind, &conversation).unwrap();
        let key = encode_key(kind, &conversation, position).unwrap();
        prop_assert_eq!(key.len(), prefix.len() + 8);
        prop_assert_eq!(&key[prefix.len()..], &position.to_be_bytes()[..]);
    }

    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let _ = decode_key(&bytes);
    }
}

#[test]
fn separator_bytes_inside_position_decode() {
    // 0x2B is '+', 0x40 is '@'
    let position = u64::from_be_bytes([0x40, 0x2B, 0x40, 0x2B, 0, 0, 0x40, 0x2B]);
    let key = encode_key(ObjectKind::Bite, "c1", position).unwrap();
    let addr = decode_key(&key).unwrap();
    assert_eq!(addr.position, position);
    assert_eq!(addr.conversation, "c1");
}

#[test]
fn documented_layout() {
    let key = encode_key(ObjectKind::Bite, "c1", 20).unwrap();
    assert_eq!(key, b"bite+c1@\x00\x00\x00\x00\x00\x00\x00\x14".to_vec());
    assert_eq!(encode_prefix(ObjectKind::User, "u-9").unwrap(), b"user+u-9@".to_vec());
}

#[test]
fn malformed_keys_are_rejected() {
    let cases: &[&[u8]] = &[
        &b""[..],
        &b"bite+c1"[..],
        &b"bite+c1@\x00\x01"[..],
        &b"bitec1@\x00\x00\x00\x00\x00\x00\x00\x01"[..],
        &b"group+c1@\x00\x00\x00\x00\x00\x00\x00\x01"[..],
        &b"bite+@\x00\x00\x00\x00\x00\x00\x00\x01"[..],
        &b"bite+a/b@\x00\x00\x00\x00\x00\x00\x00\x01"[..],
    ];
    for key in cases {
        let err = decode_key(key).unwrap_err();
        assert!(
            matches!(err, Error::MalformedKey(_)),
            "expected MalformedKey for {:?}, got {:?}",
            String::from_utf8_lossy(key),
            err
        );
    }
}
