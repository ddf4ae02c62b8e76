use crate::value::*;
use proptest::prelude::*;

#[test]
fn test_sentinel_encodings() {
    assert_eq!(Key::<u32>::WHITELIST.raw(), 0);
    assert_eq!(Key::<u32>::MINIMUM.raw(), u32::MAX - 4);
    assert_eq!(Key::<u32>::MAXIMUM.raw(), u32::MAX - 3);
    assert_eq!(Key::<u32>::PERFECT.raw(), u32::MAX - 2);
    assert_eq!(Key::<u32>::BLACKLIST.raw(), u32::MAX - 1);
    assert_eq!(Key::<u32>::NULL.raw(), u32::MAX);
}

#[test]
fn test_decoding_per_width() {
    assert_eq!(Key::<u8>::from_raw(255), Key::NULL);
    assert_eq!(Key::<u8>::from_raw(254), Key::BLACKLIST);
    assert_eq!(Key::<u8>::from_raw(253), Key::PERFECT);
    assert_eq!(Key::<u8>::from_raw(252), Key::MAXIMUM);
    assert_eq!(Key::<u8>::from_raw(251), Key::MINIMUM);
    assert_eq!(Key::<u8>::from_raw(250).kind(), KeyKind::Score(250));
    assert_eq!(Key::<u16>::from_raw(0), Key::WHITELIST);
    assert_eq!(Key::<u64>::from_raw(u64::MAX - 1), Key::BLACKLIST);
}

#[test]
fn test_default_is_null() {
    let key: Key = Key::default();
    assert!(key.is_null());
}

#[test]
fn test_checked_score() {
    assert_eq!(Key::<u32>::score(5).unwrap().raw(), 5);
    assert_eq!(Key::<u32>::score(u32::MAX - 5).unwrap().raw(), u32::MAX - 5);

    assert_eq!(
        Key::<u8>::score(0),
        Err(crate::ValidlistError::ReservedScore {
            score: 0,
            max_score: 250
        })
    );
    assert!(Key::<u8>::score(251).is_err());
    assert!(Key::<u32>::score(u32::MAX).is_err());
}

#[test]
fn test_predicates() {
    let score: Key = Key::from_raw(42);
    assert!(score.is_score());
    assert!(score.is_accepting());
    assert!(!score.is_bound());

    assert!(Key::<u32>::MINIMUM.is_bound());
    assert!(Key::<u32>::MAXIMUM.is_bound());
    assert!(Key::<u32>::PERFECT.is_accepting());
    assert!(Key::<u32>::WHITELIST.is_accepting());
    assert!(!Key::<u32>::BLACKLIST.is_accepting());
    assert!(!Key::<u32>::NULL.is_accepting());
}

#[test]
fn test_ordering_plain() {
    let small: Key = Key::from_raw(5);
    let big: Key = Key::from_raw(573_789);

    assert!(small < big);
    assert!(big > small);
    assert!(small <= big);
    assert!(big >= small);
    assert!(small != big);

    assert!(Key::<u32>::WHITELIST < Key::BLACKLIST);
    assert!(big < Key::PERFECT);
    assert!(Key::<u32>::PERFECT < Key::BLACKLIST);
}

#[test]
fn test_ordering_null_inverts() {
    let others: [Key; 6] = [
        Key::WHITELIST,
        Key::from_raw(7),
        Key::MINIMUM,
        Key::MAXIMUM,
        Key::PERFECT,
        Key::BLACKLIST,
    ];

    for k in others {
        // raw(NULL) > raw(k), yet NULL orders first.
        assert!(Key::NULL < k, "NULL < {k}");
        assert!(!(Key::NULL > k), "!(NULL > {k})");
        assert!(k > Key::NULL, "{k} > NULL");
        assert!(!(k < Key::NULL), "!({k} < NULL)");
        assert!(Key::NULL != k);
    }

    assert!(!(Key::<u32>::NULL < Key::NULL));
    assert!(!(Key::<u32>::NULL > Key::NULL));
    assert_eq!(Key::<u32>::NULL, Key::NULL);
}

#[test]
fn test_to_outcome_mapping() {
    assert_eq!(Key::<u32>::WHITELIST.to_outcome(), Some(Outcome::PASS));
    assert_eq!(Key::<u32>::PERFECT.to_outcome(), Some(Outcome::PERFECT));
    assert_eq!(Key::<u32>::BLACKLIST.to_outcome(), Some(Outcome::FAIL));
    assert_eq!(
        Key::<u32>::from_raw(10).to_outcome(),
        Some(Outcome::from_raw(10))
    );
    assert_eq!(Key::<u32>::MINIMUM.to_outcome(), None);
    assert_eq!(Key::<u32>::MAXIMUM.to_outcome(), None);
    assert_eq!(Key::<u32>::NULL.to_outcome(), None);

    // Largest key score stays a plain outcome score.
    let top = Key::<u8>::from_raw(250).to_outcome().unwrap();
    assert!(top.is_score());
    assert_eq!(top.raw(), 250);
}

#[test]
fn test_parse() {
    assert_eq!("whitelist".parse::<Key>().unwrap(), Key::WHITELIST);
    assert_eq!("BLACKLIST".parse::<Key>().unwrap(), Key::BLACKLIST);
    assert_eq!(" Perfect ".parse::<Key>().unwrap(), Key::PERFECT);
    assert_eq!("NULL_KEY".parse::<Key>().unwrap(), Key::NULL);
    assert_eq!("42".parse::<Key>().unwrap(), Key::from_raw(42));
    assert!("0".parse::<Key>().is_err());
    assert_eq!(
        "greylist".parse::<Key>(),
        Err(crate::ValidlistError::InvalidKeyName("greylist".to_string()))
    );
}

#[test]
fn test_display() {
    assert_eq!(Key::<u32>::WHITELIST.to_string(), "WHITELIST");
    assert_eq!(Key::<u32>::NULL.to_string(), "NULL_KEY");
    assert_eq!(Key::<u32>::from_raw(10).to_string(), "10");
    assert_eq!(
        format!("{:#}", Key::<u32>::WHITELIST),
        "{Key value: 0, Tag: WHITELIST}"
    );
    assert_eq!(
        format!("{:#}", Key::<u32>::from_raw(10)),
        "{Key value: 10, Tag: score}"
    );
    assert_eq!(format!("{:?}", Key::<u8>::BLACKLIST), "Key(BLACKLIST)");
}

proptest! {
    #[test]
    fn prop_plain_scores_round_trip(v in 1u32..=(u32::MAX - 5)) {
        let key = Key::from_raw(v);
        prop_assert_eq!(key.raw(), v);
        prop_assert!(key.is_score());
        prop_assert_eq!(Key::score(v), Ok(key));
    }

    #[test]
    fn prop_raw_decoding_is_total(v in any::<u16>()) {
        prop_assert_eq!(Key::from_raw(v).raw(), v);
    }

    #[test]
    fn prop_ordering_matches_raw_without_null(a in 0u32..u32::MAX, b in 0u32..u32::MAX) {
        let (ka, kb) = (Key::from_raw(a), Key::from_raw(b));
        prop_assert_eq!(ka < kb, a < b);
        prop_assert_eq!(ka == kb, a == b);
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn test_tags_serialize_by_name() {
        assert_eq!(serde_yaml::to_string(&Key::<u32>::WHITELIST).unwrap(), "whitelist\n");
        let key: Key = serde_yaml::from_str("blacklist").unwrap();
        assert_eq!(key, Key::BLACKLIST);
    }

    #[test]
    fn test_round_trip() {
        for key in [Key::<u16>::PERFECT, Key::NULL, Key::from_raw(42)] {
            let yaml = serde_yaml::to_string(&key).unwrap();
            assert_eq!(serde_yaml::from_str::<Key<u16>>(&yaml).unwrap(), key);
        }
    }

    #[test]
    fn test_reserved_score_is_rejected() {
        let yaml = serde_yaml::to_string(&KeyKind::Score(0u32)).unwrap();
        assert!(serde_yaml::from_str::<Key>(&yaml).is_err());
    }
}
