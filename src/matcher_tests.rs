//! Tests for the closest-price search

use super::*;

fn record(code: &str, reference_price: f64, sales_price: f64) -> ItemRecord {
    ItemRecord {
        item_code: code.to_string(),
        reference_price,
        sales_price,
    }
}

fn two_item_catalog() -> Catalog {
    Catalog::from_records(vec![record("A", 10.0, 15.0), record("B", 20.0, 25.0)])
}

#[test]
fn test_closest_record_wins() {
    let catalog = two_item_catalog();
    let found = search(Some(&catalog), Some("19")).unwrap();

    assert_eq!(
        found,
        PriceMatch {
            sales_price: 25.0,
            item_code: "B".to_string(),
            reference_price: 20.0,
        }
    );
}

#[test]
fn test_tie_keeps_first_record() {
    let catalog = two_item_catalog();
    let found = search(Some(&catalog), Some("15")).unwrap();
    assert_eq!(found.item_code, "A");
}

#[test]
fn test_tie_keeps_first_of_duplicate_codes() {
    let catalog = Catalog::from_records(vec![
        record("X", 5.0, 1.0),
        record("DUP", 8.0, 2.0),
        record("DUP", 8.0, 3.0),
    ]);
    let found = search(Some(&catalog), Some("8")).unwrap();
    assert_eq!(found.sales_price, 2.0);
}

#[test]
fn test_tie_on_both_sides_prefers_lowest_index() {
    let catalog = Catalog::from_records(vec![
        record("HIGH", 12.0, 1.0),
        record("LOW", 8.0, 2.0),
    ]);
    let found = search(Some(&catalog), Some("10")).unwrap();
    assert_eq!(found.item_code, "HIGH");
}

#[test]
fn test_search_is_deterministic() {
    let catalog = Catalog::from_records(vec![
        record("A", 1.5, 2.0),
        record("B", 3.0, 4.0),
        record("C", 3.0, 5.0),
        record("D", 9.99, 12.0),
    ]);

    let first = search(Some(&catalog), Some("2,9")).unwrap();
    for _ in 0..10 {
        assert_eq!(search(Some(&catalog), Some("2,9")).unwrap(), first);
    }
    assert_eq!(first.item_code, "B");
}

#[test]
fn test_comma_behaves_like_period() {
    let catalog = Catalog::from_records(vec![
        record("A", 12.0, 1.0),
        record("B", 12.5, 2.0),
        record("C", 13.0, 3.0),
    ]);

    assert_eq!(
        search(Some(&catalog), Some("12,5")),
        search(Some(&catalog), Some("12.5"))
    );
    assert_eq!(search(Some(&catalog), Some("12,5")).unwrap().item_code, "B");
}

#[test]
fn test_comma_exact_match() {
    let catalog = Catalog::from_records(vec![record("A", 3.0, 4.0), record("HALF", 10.5, 14.0)]);
    let found = search(Some(&catalog), Some("10,5")).unwrap();

    assert_eq!(found.item_code, "HALF");
    assert_eq!(found.reference_price, 10.5);
    assert_eq!(found.sales_price, 14.0);
}

#[test]
fn test_surrounding_whitespace_is_tolerated() {
    let catalog = two_item_catalog();
    assert_eq!(search(Some(&catalog), Some("  19 ")).unwrap().item_code, "B");
}

#[test]
fn test_missing_catalog_is_unavailable() {
    assert_eq!(search(None, Some("19")), Err(SearchError::CatalogUnavailable));
    assert_eq!(search(None, None), Err(SearchError::CatalogUnavailable));
    assert_eq!(search(None, Some("abc")), Err(SearchError::CatalogUnavailable));
}

#[test]
fn test_empty_catalog_is_unavailable() {
    let catalog = Catalog::default();
    assert_eq!(
        search(Some(&catalog), Some("19")),
        Err(SearchError::CatalogUnavailable)
    );
}

#[test]
fn test_blank_input_is_rejected() {
    let catalog = two_item_catalog();

    assert_eq!(search(Some(&catalog), Some("")), Err(SearchError::EmptyInput));
    assert_eq!(search(Some(&catalog), Some("   ")), Err(SearchError::EmptyInput));
    assert_eq!(search(Some(&catalog), Some("\t\n")), Err(SearchError::EmptyInput));
    assert_eq!(search(Some(&catalog), None), Err(SearchError::EmptyInput));
}

#[test]
fn test_non_numeric_input_is_rejected() {
    let catalog = two_item_catalog();

    assert_eq!(
        search(Some(&catalog), Some("abc")),
        Err(SearchError::InvalidNumber("abc".to_string()))
    );
    assert_eq!(
        search(Some(&catalog), Some("twelve")),
        Err(SearchError::InvalidNumber("twelve".to_string()))
    );
}

#[test]
fn test_multiple_separators_are_rejected() {
    let catalog = two_item_catalog();

    assert!(matches!(
        search(Some(&catalog), Some("1,234.5")),
        Err(SearchError::InvalidNumber(_))
    ));
    assert!(matches!(
        search(Some(&catalog), Some("1.2.3")),
        Err(SearchError::InvalidNumber(_))
    ));
    assert!(matches!(
        search(Some(&catalog), Some(",")),
        Err(SearchError::InvalidNumber(_))
    ));
}

#[test]
fn test_currency_symbols_are_not_stripped() {
    let catalog = two_item_catalog();
    assert!(matches!(
        search(Some(&catalog), Some("12 €")),
        Err(SearchError::InvalidNumber(_))
    ));
}

#[test]
fn test_non_finite_input_is_rejected() {
    let catalog = two_item_catalog();

    for input in ["inf", "-infinity", "NaN"] {
        assert!(
            matches!(
                search(Some(&catalog), Some(input)),
                Err(SearchError::InvalidNumber(_))
            ),
            "input {:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_negative_input_matches_lowest_price() {
    let catalog = two_item_catalog();
    assert_eq!(search(Some(&catalog), Some("-5")).unwrap().item_code, "A");
}

#[test]
fn test_normalize_input_only_swaps_commas() {
    assert_eq!(normalize_input("1,5"), "1.5");
    assert_eq!(normalize_input(" 1,5 € "), " 1.5 € ");
    assert_eq!(normalize_input("1,2,3"), "1.2.3");
}

#[test]
fn test_parse_price() {
    assert_eq!(parse_price("12.5"), Ok(12.5));
    assert_eq!(parse_price(" 7 "), Ok(7.0));
    assert_eq!(parse_price(".5"), Ok(0.5));
    assert!(parse_price("").is_err());
    assert!(parse_price("1.2.3").is_err());
}

#[test]
fn test_closest_on_empty_catalog_is_none() {
    assert!(closest(&Catalog::default(), 1.0).is_none());
}
