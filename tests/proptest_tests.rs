// SPDX-License-Identifier: Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify the key grammar,
//! scalar conversions, and layered resolution over arbitrary inputs.

use layercfg::prelude::*;
use proptest::prelude::*;

// Test that ConfigKey can be created from any string
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Test that child segments always join with exactly one dot
proptest! {
    #[test]
    fn test_child_grammar(
        parts in prop::collection::vec("[a-z][a-z0-9]*", 1..6)
    ) {
        let mut key = ConfigKey::root();
        for part in &parts {
            key = key.child(part);
        }
        let expected = parts.join(".");
        prop_assert_eq!(key.as_str(), expected.as_str());
    }
}

// Test that index brackets attach with no separator
proptest! {
    #[test]
    fn test_index_grammar(
        base in "[a-z]+(\\.[a-z]+)*",
        i in 0usize..10_000
    ) {
        let key = ConfigKey::from(base.clone()).index(i);
        let expected = format!("{}[{}]", base, i);
        prop_assert_eq!(key.as_str(), expected.as_str());
    }
}

// Test mixed composition: the grammar is associative over segments
proptest! {
    #[test]
    fn test_mixed_grammar_composition(
        a in "[a-z]+",
        b in "[a-z]+",
        i in 0usize..100,
        c in "[a-z]+"
    ) {
        let key = ConfigKey::root().child(&a).child(&b).index(i).child(&c);
        let expected = format!("{}.{}[{}].{}", a, b, i, c);
        prop_assert_eq!(key.as_str(), expected.as_str());
    }
}

// Test scalar parsing round-trips
proptest! {
    #[test]
    fn test_i64_parsing_valid(n in prop::num::i64::ANY) {
        let value = ConfigValue::from(n.to_string());
        prop_assert_eq!(value.as_i64("test").unwrap(), n);
    }
}

proptest! {
    #[test]
    fn test_u64_parsing_valid(n in prop::num::u64::ANY) {
        let value = ConfigValue::from(n.to_string());
        prop_assert_eq!(value.as_u64("test").unwrap(), n);
    }
}

proptest! {
    #[test]
    fn test_f64_parsing_valid(n in prop::num::f64::NORMAL) {
        let value = ConfigValue::from(n.to_string());
        let parsed = value.as_f64("test").unwrap();
        // Allow for floating point precision issues
        prop_assert!((parsed - n).abs() < 1e-10 * n.abs().max(1.0));
    }
}

// Test that non-numeric strings fail integer parsing
proptest! {
    #[test]
    fn test_integer_parsing_non_numeric(
        s in "[a-zA-Z]\\PC*"
    ) {
        let value = ConfigValue::from(s);
        prop_assert!(value.as_i64("test").is_err());
    }
}

// Test the precedence invariant: the first source holding a non-empty
// value always wins, regardless of what later sources hold.
proptest! {
    #[test]
    fn test_first_non_empty_source_wins(
        values in prop::collection::vec(prop::option::of("[a-z0-9]*"), 1..6)
    ) {
        let mut registry = ConfigRegistry::new();
        for held in &values {
            let mut adapter = MapAdapter::new("layer");
            if let Some(v) = held {
                adapter = adapter.with_value("k", v);
            }
            registry.add_last(Box::new(adapter));
        }

        let expected = values
            .iter()
            .flatten()
            .find(|v| !v.is_empty());

        match expected {
            Some(v) => {
                let got = registry.get_string("k").unwrap();
                prop_assert_eq!(got.as_str(), v.as_str());
            }
            None => prop_assert!(registry.get_string("k").unwrap_err().is_not_found()),
        }
    }
}

// Test that binding a Vec recovers exactly the values a source stored
// under consecutive bracketed indices.
proptest! {
    #[test]
    fn test_vec_bind_recovers_stored_sequence(
        items in prop::collection::vec(prop::num::i64::ANY, 1..10)
    ) {
        let mut adapter = MapAdapter::new("seq");
        for (i, item) in items.iter().enumerate() {
            adapter = adapter.with_value(
                ConfigKey::from("xs").index(i).as_str(),
                &item.to_string(),
            );
        }
        let registry = ConfigRegistry::builder()
            .with_source(Box::new(adapter))
            .build();

        prop_assert_eq!(registry.get_i64_vec("xs").unwrap(), items);
    }
}

// Test that a default never masks a present value
proptest! {
    #[test]
    fn test_default_only_for_absence(n in prop::num::i64::ANY, d in prop::num::i64::ANY) {
        let registry = ConfigRegistry::builder()
            .with_source(Box::new(MapAdapter::new("m").with_value("n", &n.to_string())))
            .build();

        prop_assert_eq!(registry.get_i64_or("n", d).unwrap(), n);
        prop_assert_eq!(registry.get_i64_or("absent", d).unwrap(), d);
    }
}

// Test empty string handling
#[test]
fn test_empty_string_value() {
    let value = ConfigValue::from("");
    assert_eq!(value.as_str(), "");
    assert!(value.as_bool("test").is_err());
}

// Test unicode handling
proptest! {
    #[test]
    fn test_unicode_strings(s in "\\p{Greek}+|\\p{Cyrillic}+|\\p{Han}+") {
        let key = ConfigKey::from(s.clone());
        let value = ConfigValue::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
        prop_assert_eq!(value.as_str(), s.as_str());
    }
}
