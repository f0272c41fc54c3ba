//! Property tests for entry validation.

use proptest::prelude::*;

use yams::domain::services::{check, coerce, Coerced};
use yams::domain::value_objects::{CategoryKind, CATALOG, MAX_ENTRY};
use yams::{validate, CategoryId, EntryOutcome};

fn any_category() -> impl Strategy<Value = CategoryId> {
    proptest::sample::select(CategoryId::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary input.
    #[test]
    fn property_validate_never_panics(id in any_category(), raw in "(?s).{0,64}") {
        let _ = validate(id.category(), &raw);
    }

    /// PROPERTY: an accepted value is in range and passes the category rule.
    #[test]
    fn property_accepted_values_obey_category(id in any_category(), raw in "[ -]?[0-9]{0,4}([.,][0-9]{0,2})?") {
        if let EntryOutcome::Accepted(v) = validate(id.category(), &raw) {
            prop_assert!(v >= 1 && v <= MAX_ENTRY);
            prop_assert!(check(id.category(), v).is_ok());
        }
    }

    /// PROPERTY: coerced values are clamped to [0, 999].
    #[test]
    fn property_coerce_clamps(n in -100_000.0f64..100_000.0) {
        match coerce(&n.to_string()) {
            Coerced::Value(v) => prop_assert!(v <= MAX_ENTRY),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    /// PROPERTY: integers are accepted by exactly the categories whose rule admits them.
    #[test]
    fn property_integer_entry_matches_rule(id in any_category(), v in 1u16..=MAX_ENTRY) {
        let outcome = validate(id.category(), &v.to_string());
        prop_assert_eq!(outcome.is_accepted(), check(id.category(), v).is_ok());
        if outcome.is_accepted() {
            prop_assert_eq!(outcome.stored_value(), Some(v));
        }
    }

    /// PROPERTY: an upper value at or above its face is a multiple of it, at most six dice.
    #[test]
    fn property_upper_accepts_dice_multiples(face_index in 0usize..6, dice in 1u16..=6) {
        let category = &CATALOG[face_index];
        let CategoryKind::UpperNumeric { face } = category.kind else {
            panic!("upper section must be numeric");
        };
        let value = u16::from(face) * dice;
        prop_assert_eq!(validate(category, &value.to_string()), EntryOutcome::Accepted(value));
    }
}
