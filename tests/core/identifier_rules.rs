//! Identifier rules as seen from the public API
//!
//! Validation runs before any key is built, so every entry point that takes
//! untrusted text must reject the same inputs the validator rejects.

use crate::common::*;
use bitestore::{
    is_valid_conversation, is_valid_kind, parse_position, validate_conversation, AddressError,
};
use proptest::prelude::*;

#[test]
fn accepted_identifiers() {
    for conv in ["c1", "conv-1", "A-b-C", "0", "-", "x".repeat(300).as_str()] {
        assert!(is_valid_conversation(conv), "{conv:?} should be accepted");
    }
    assert!(is_valid_kind("bite"));
    assert!(is_valid_kind("user"));
}

#[test]
fn rejected_identifiers() {
    for conv in ["", "a/b", "a+b", "a@b", "a b", "a_b", "é", "a\n"] {
        assert!(!is_valid_conversation(conv), "{conv:?} should be rejected");
    }
    for kind in ["group", "Bite", "BITE", "", "bite "] {
        assert!(!is_valid_kind(kind), "{kind:?} should be rejected");
    }
}

#[test]
fn first_offending_character_reported() {
    assert_eq!(
        validate_conversation("ab/c@d"),
        Err(AddressError::InvalidCharacter { ch: '/', index: 2 })
    );
    assert_eq!(
        validate_conversation(""),
        Err(AddressError::EmptyConversation)
    );
}

#[test]
fn address_parse_validates_text() {
    let addr = Address::parse("user", "u-1", 7).unwrap();
    assert_eq!(addr, Address::new(ObjectKind::User, "u-1", 7));

    let err = Address::parse("group", "u-1", 7).unwrap_err();
    assert_eq!(err.reason_code(), "unknown_kind");
    assert!(err.is_client_error());

    let err = Address::parse("bite", "a/b", 7).unwrap_err();
    assert_eq!(err.reason_code(), "invalid_character");
}

#[test]
fn encoding_rejects_invalid_conversation() {
    let err = encode_key(ObjectKind::Bite, "a/b", 1).unwrap_err();
    assert!(matches!(err, Error::InvalidAddress(_)));
    let err = encode_prefix(ObjectKind::Bite, "").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAddress(AddressError::EmptyConversation)
    ));
}

#[test]
fn position_text_parsing() {
    assert_eq!(parse_position("0").unwrap(), 0);
    assert_eq!(parse_position("18446744073709551615").unwrap(), u64::MAX);
    for bad in ["", "-1", "1.5", "abc", "18446744073709551616", " 1"] {
        let err = parse_position(bad).unwrap_err();
        assert_eq!(err.reason_code(), "invalid_position", "{bad:?}");
    }
}

proptest! {
    #[test]
    fn validator_matches_character_class(conversation in "\\PC{0,12}") {
        let expected = !conversation.is_empty()
            && conversation.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        prop_assert_eq!(is_valid_conversation(&conversation), expected);
    }

    #[test]
    fn valid_conversations_always_encode(
        conversation in "[A-Za-z0-9-]{1,64}",
        position in any::<u64>(),
    ) {
        prop_assert!(encode_key(ObjectKind::Bite, &conversation, position).is_ok());
    }
}
