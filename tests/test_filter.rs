//! Catalog filter engine tests: pure filtering, normalization, and sorting.

mod common;

use bloomshop_sdk::catalog::{
    filter_catalog, query_pairs, sort_catalog, FilterCriteria, SortDirection, SortKey,
};

// ---------------------------------------------------------------------------
// Identity and ordering
// ---------------------------------------------------------------------------

#[test]
fn empty_criteria_returns_every_product() {
    let products = common::sample_catalog();
    let result = filter_catalog(&products, &FilterCriteria::default());
    assert_eq!(result, products);
}

#[test]
fn result_is_an_order_preserving_subsequence() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        color: Some(2),
        ..Default::default()
    };
    let result = filter_catalog(&products, &criteria);

    let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);

    // Every survivor appears in the same relative position as in the input.
    let mut input_ids = products.iter().map(|p| p.id);
    for id in &ids {
        assert!(input_ids.any(|i| i == *id));
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let criteria = FilterCriteria {
        search: Some("rose".to_string()),
        ..Default::default()
    };
    assert!(filter_catalog(&[], &criteria).is_empty());
}

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

#[test]
fn search_is_case_insensitive_substring() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        search: Some("NAOMI".to_string()),
        ..Default::default()
    };
    let result = filter_catalog(&products, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Red Naomi");
}

#[test]
fn search_matches_group_name_through_composite() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        search: Some("chrysanth".to_string()),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn blank_search_matches_everything() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        search: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(filter_catalog(&products, &criteria).len(), products.len());
}

// ---------------------------------------------------------------------------
// Exact-id criteria and AND semantics
// ---------------------------------------------------------------------------

#[test]
fn group_filter_matches_exactly() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        group: Some(20),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn optional_descriptor_filters_require_a_set_value() {
    let products = common::sample_catalog();
    // Only product 4 carries origin 5; products without an origin never match.
    let criteria = FilterCriteria {
        origin: Some(5),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn all_active_criteria_must_match() {
    let products = common::sample_catalog();
    // White chrysanthemums only: color AND group.
    let criteria = FilterCriteria {
        color: Some(2),
        group: Some(20),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn height_filter_matches_exactly() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        height: Some(70),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2]);
}

// ---------------------------------------------------------------------------
// Price range
// ---------------------------------------------------------------------------

#[test]
fn price_bounds_are_inclusive() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        price_min: Some(0.95),
        price_max: Some(1.20),
        ..Default::default()
    };
    let ids: Vec<u64> = filter_catalog(&products, &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn unset_bounds_default_to_zero_and_infinity() {
    let criteria = FilterCriteria::default();
    assert_eq!(criteria.price_bounds(), (0.0, f64::INFINITY));
}

#[test]
fn reversed_price_range_is_normalized_by_swapping() {
    let products = common::sample_catalog();
    let criteria = FilterCriteria {
        price_min: Some(1.20),
        price_max: Some(0.95),
        ..Default::default()
    };
    assert_eq!(criteria.price_bounds(), (0.95, 1.20));
    assert_eq!(filter_catalog(&products, &criteria).len(), 2);
}

#[test]
fn spec_scenario_price_window_selects_product() {
    let products = vec![common::product(1, "Red Naomi", 2.50, 5)];
    let criteria = FilterCriteria {
        price_min: Some(0.0),
        price_max: Some(10.0),
        ..Default::default()
    };
    let result = filter_catalog(&products, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

// ---------------------------------------------------------------------------
// Sorting (separate from filtering)
// ---------------------------------------------------------------------------

#[test]
fn sort_by_price_ascending() {
    let mut products = common::sample_catalog();
    sort_catalog(&mut products, SortKey::Price, SortDirection::Ascending);
    let prices: Vec<f64> = products.iter().map(|p| p.unit_price).collect();
    assert_eq!(prices, vec![0.45, 0.95, 1.20, 1.60]);
}

#[test]
fn sort_by_name_descending() {
    let mut products = common::sample_catalog();
    sort_catalog(&mut products, SortKey::Name, SortDirection::Descending);
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Santini Madiba", "Red Naomi", "Avalanche", "Anastasia"]
    );
}

#[test]
fn sort_is_stable_on_equal_keys() {
    let mut products = vec![
        common::product(1, "Freedom", 1.00, 10),
        common::product(2, "Explorer", 1.00, 10),
        common::product(3, "Mondial", 1.00, 10),
    ];
    sort_catalog(&mut products, SortKey::Price, SortDirection::Ascending);
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Query-parameter mirror
// ---------------------------------------------------------------------------

#[test]
fn query_pairs_skips_unset_fields() {
    assert!(query_pairs(&FilterCriteria::default()).is_empty());
}

#[test]
fn query_pairs_mirrors_set_fields() {
    let criteria = FilterCriteria {
        search: Some(" rose ".to_string()),
        color: Some(2),
        group: Some(20),
        price_min: Some(0.5),
        price_max: Some(2.0),
        ..Default::default()
    };
    let pairs = query_pairs(&criteria);
    assert_eq!(
        pairs,
        vec![
            ("search", "rose".to_string()),
            ("color", "2".to_string()),
            ("group", "20".to_string()),
            ("priceMin", "0.5".to_string()),
            ("priceMax", "2".to_string()),
        ]
    );
}

#[test]
fn query_pairs_omits_infinite_upper_bound() {
    let criteria = FilterCriteria {
        price_min: Some(1.0),
        ..Default::default()
    };
    let pairs = query_pairs(&criteria);
    assert_eq!(pairs, vec![("priceMin", "1".to_string())]);
}
