//! Closest-price search over a loaded catalog

use crate::catalog::{Catalog, ItemRecord};
use crate::error::SearchError;
use serde::Serialize;

/// Fields of the record closest to the requested price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceMatch {
    pub sales_price: f64,
    pub item_code: String,
    pub reference_price: f64,
}

impl From<&ItemRecord> for PriceMatch {
    fn from(record: &ItemRecord) -> Self {
        Self {
            sales_price: record.sales_price,
            item_code: record.item_code.clone(),
            reference_price: record.reference_price,
        }
    }
}

/// Find the record whose reference price is closest to `raw_input`
///
/// Checks run in order: catalog presence, blank input, then number parsing.
/// A comma is accepted as decimal separator.
pub fn search(catalog: Option<&Catalog>, raw_input: Option<&str>) -> Result<PriceMatch, SearchError> {
    let catalog = match catalog {
        Some(c) if !c.is_empty() => c,
        _ => return Err(SearchError::CatalogUnavailable),
    };

    let raw_input = match raw_input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(SearchError::EmptyInput),
    };

    let normalized = normalize_input(raw_input);
    let target = parse_price(&normalized)?;

    // Only reachable when every difference overflows to infinity
    closest(catalog, target)
        .map(PriceMatch::from)
        .ok_or(SearchError::InvalidNumber(normalized))
}

/// Replace decimal commas with periods
pub fn normalize_input(raw: &str) -> String {
    raw.replace(',', ".")
}

/// Parse a normalized price, rejecting anything that is not a finite number
pub fn parse_price(normalized: &str) -> Result<f64, SearchError> {
    match normalized.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SearchError::InvalidNumber(normalized.to_string())),
    }
}

/// Linear scan for the smallest absolute difference
///
/// Ties keep the earliest record: a later record only wins with a strictly
/// smaller difference.
pub fn closest(catalog: &Catalog, target: f64) -> Option<&ItemRecord> {
    let mut best: Option<&ItemRecord> = None;
    let mut min_difference = f64::INFINITY;

    for record in catalog.iter() {
        let difference = (record.reference_price - target).abs();
        if difference < min_difference {
            min_difference = difference;
            best = Some(record);
        }
    }

    best
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
