/// Property-based tests for structural cloning.
///
/// Uses the `proptest` crate to generate random nested values and verify
/// the cloning contract on inputs hand-written tests would not think of:
///
/// - a clone is structurally equal to its source
/// - the explicit-stack cloner agrees with the recursive one everywhere
/// - cloning a clone changes nothing
/// - mutating a clone is never observable on the source
/// - values survive the serde_json boundary in both directions
///
/// Floats are generated finite only: NaN and infinities have no JSON
/// form (they print as null) and are excluded by construction.
use dup_core::{from_json, seq, to_json, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating values
// ============================================================================

/// Generate a mapping key (non-empty, identifier-shaped).
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,15}")
        .unwrap()
        .prop_filter("key must not be empty", |s| !s.is_empty())
}

/// Generate a scalar leaf with edge cases.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(Value::Integer),
        (-1.0e9f64..1.0e9f64).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        // Strings that look like other kinds
        Just(Value::from("true")),
        Just(Value::from("null")),
        Just(Value::from("42")),
        Just(Value::from("")),
        // Unicode
        Just(Value::from("caf\u{00e9}")),
        Just(Value::from("\u{4f60}\u{597d}")),
        // Escape-needing content
        Just(Value::from("line1\nline2")),
        Just(Value::from("say \"hi\"")),
    ]
}

/// Generate a nested value: scalars at the leaves, sequences and mappings
/// above them, up to 4 levels deep. Mapping keys are made unique by
/// generating a map first.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::btree_map(arb_key(), inner, 0..6)
                .prop_map(|map| Value::Mapping(map.into_iter().collect())),
        ]
    })
}

// ============================================================================
// Cloning properties
// ============================================================================

proptest! {
    #[test]
    fn clone_is_structurally_equal(value in arb_value()) {
        prop_assert_eq!(value.clone(), value);
    }

    #[test]
    fn iterative_clone_agrees_with_recursive(value in arb_value()) {
        prop_assert_eq!(value.deep_clone_iterative(), value.clone());
    }

    #[test]
    fn clone_of_clone_is_stable(value in arb_value()) {
        let once = value.clone();
        let twice = once.clone();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn mutating_clone_preserves_source(value in arb_value()) {
        let snapshot = to_json(&value).unwrap();
        let mut copy = value.clone();

        // Grow whichever container kind the root is; scalars are replaced
        // wholesale, which exercises nothing shared either.
        match &mut copy {
            Value::Sequence(items) => items.push(Value::from("probe value")),
            // Space in the key keeps it out of arb_key's alphabet.
            Value::Mapping(entries) => entries.push(("probe key".to_string(), Value::Null)),
            other => *other = Value::from("probe value"),
        }

        prop_assert_eq!(to_json(&value).unwrap(), snapshot);
    }
}

// ============================================================================
// Interop properties
// ============================================================================

proptest! {
    #[test]
    fn survives_serde_value_roundtrip(value in arb_value()) {
        let through = Value::from(serde_json::Value::from(&value));
        prop_assert_eq!(through, value);
    }

    #[test]
    fn survives_json_text_roundtrip(value in arb_value()) {
        let text = to_json(&value).unwrap();
        let back = from_json(&text).unwrap();
        prop_assert_eq!(back, value);
    }
}

// ============================================================================
// Helper properties
// ============================================================================

proptest! {
    #[test]
    fn dedup_is_idempotent(items in prop::collection::vec(arb_scalar(), 0..16)) {
        let once = seq::dedup(&items);
        let twice = seq::dedup(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn pluck_never_outgrows_input(
        items in prop::collection::vec(arb_value(), 0..8),
        key in arb_key(),
    ) {
        prop_assert!(seq::pluck(&items, &key).len() <= items.len());
    }
}
