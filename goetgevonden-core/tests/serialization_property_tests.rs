//! Property-Based Tests for Query Serialization and Shape Normalization
//!
//! **Property 1: Selective key inclusion**
//!
//! For any `IndexRange`, the serialized form SHALL contain `name` always and
//! `from`/`to` exactly when set; an omitted bound never appears as a key.
//!
//! **Property 2: No nulls**
//!
//! For any `IndexQuery`, the serialized form SHALL never contain a `null`
//! value; unset fields are omitted entirely.
//!
//! **Property 3: Total normalization**
//!
//! For any hit list and integer total, both upstream response shapes SHALL
//! normalize to the same total and hit count; a total that is neither an
//! integer nor an object with an integer `value` resolves to 0.

use goetgevonden_core::{IndexQuery, IndexRange, SearchResult};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// PROPERTY TEST STRATEGIES
// ============================================================================

/// Strategy for index field names.
fn field_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Common field names
        Just("date".to_string()),
        Just("year".to_string()),
        Just("textType".to_string()),
        // Arbitrary identifiers
        "[a-z][a-zA-Z0-9]{0,14}",
    ]
}

/// Strategy for optional range bounds (years, dates, bare numbers).
fn bound_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        "1[5-7][0-9]{2}",
        "1[5-7][0-9]{2}-[0-1][0-9]-[0-3][0-9]",
        "[0-9]{1,6}",
    ])
}

/// Strategy for hit records as returned by the service.
fn hits_strategy() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(
        "[a-z0-9]{1,8}".prop_map(|id| json!({"_id": id})),
        0..8,
    )
}

/// Strategy for `total` values outside the recognized integer/object forms.
fn unrecognized_total_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("many")),
        Just(json!(true)),
        Just(json!([1, 2, 3])),
        Just(json!({"count": 3})),
        Just(json!(null)),
        (0.0f64..1.0).prop_map(|f| json!(0.5 + f)),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_index_range_selective_inclusion(
        name in field_name_strategy(),
        from in bound_strategy(),
        to in bound_strategy(),
    ) {
        let mut range = IndexRange::new(name.clone());
        if let Some(ref from) = from {
            range = range.with_from(from.clone());
        }
        if let Some(ref to) = to {
            range = range.with_to(to.clone());
        }

        let value = serde_json::to_value(&range).unwrap();
        let fields = value.as_object().unwrap();

        prop_assert_eq!(fields.get("name").and_then(Value::as_str), Some(name.as_str()));
        prop_assert_eq!(fields.contains_key("from"), from.is_some());
        prop_assert_eq!(fields.contains_key("to"), to.is_some());
        prop_assert!(fields.values().all(|v| !v.is_null()));
    }

    #[test]
    fn prop_index_query_never_emits_null(
        text in proptest::option::of("[a-zA-Z ]{1,20}"),
        date_name in field_name_strategy(),
        with_date in any::<bool>(),
        with_range in any::<bool>(),
    ) {
        let mut query = IndexQuery::new();
        if let Some(ref text) = text {
            query = query.with_text(text.clone());
        }
        if with_date {
            query = query.with_date(IndexRange::between(date_name.clone(), "1600", "1650"));
        }
        if with_range {
            query = query.with_range(IndexRange::new(date_name.clone()));
        }

        let value = serde_json::to_value(&query).unwrap();
        let fields = value.as_object().unwrap();

        prop_assert_eq!(fields.contains_key("text"), text.is_some());
        prop_assert_eq!(fields.contains_key("date"), with_date);
        prop_assert_eq!(fields.contains_key("range"), with_range);
        prop_assert!(!fields.contains_key("terms"));
        prop_assert!(!fields.contains_key("aggs"));
        prop_assert!(fields.values().all(|v| !v.is_null()));
    }

    #[test]
    fn prop_flat_shape_normalizes(
        total in 0i64..1_000_000,
        hits in hits_strategy(),
    ) {
        let data = json!({
            "total": {"value": total, "relation": "eq"},
            "results": hits,
            "aggs": {},
        });
        let result = SearchResult::from_value(&data);
        prop_assert_eq!(result.total, total);
        prop_assert_eq!(result.hits.len(), data["results"].as_array().unwrap().len());
        prop_assert_eq!(result.raw_response, data);
    }

    #[test]
    fn prop_nested_shape_normalizes(
        total in 0i64..1_000_000,
        hits in hits_strategy(),
    ) {
        let data = json!({
            "hits": {
                "total": {"value": total},
                "hits": hits.clone(),
            },
        });
        let result = SearchResult::from_value(&data);
        prop_assert_eq!(result.total, total);
        prop_assert_eq!(result.hits, hits);
    }

    #[test]
    fn prop_bare_integer_total_passes_through(
        total in any::<i64>(),
        flat in any::<bool>(),
    ) {
        let data = if flat {
            json!({"total": total, "results": []})
        } else {
            json!({"hits": {"total": total, "hits": []}})
        };
        prop_assert_eq!(SearchResult::from_value(&data).total, total);
    }

    #[test]
    fn prop_unrecognized_total_resolves_to_zero(
        total in unrecognized_total_strategy(),
        flat in any::<bool>(),
    ) {
        let data = if flat {
            json!({"total": total, "results": []})
        } else {
            json!({"hits": {"total": total, "hits": []}})
        };
        prop_assert_eq!(SearchResult::from_value(&data).total, 0);
    }
}
