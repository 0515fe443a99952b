//! Price catalog loading and validation
//!
//! The catalog is a JSON array of objects carrying `item`, `store_cession_price`
//! and `sales_price`. Prices may be JSON numbers or numeric strings. Loading is
//! all-or-nothing: one bad record rejects the whole document.

use crate::error::{LoadError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One catalog entry with both prices validated as finite numbers
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub item_code: String,
    /// Price searches are matched against (`store_cession_price` in the source)
    pub reference_price: f64,
    pub sales_price: f64,
}

/// A price field as it appears in the source file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    item: RawValue,
    store_cession_price: Option<RawValue>,
    sales_price: Option<RawValue>,
}

/// Immutable, ordered collection of item records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ItemRecord>,
}

impl Catalog {
    /// Build a catalog from records that are already validated
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        Self { records }
    }

    /// Read and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|e| LoadError::SourceUnavailable {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;

        parse_document(&text, &source_name)
    }

    /// Validate a catalog held in memory
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_document(text, "<memory>")
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_document(text: &str, source_name: &str) -> Result<Catalog> {
    let unavailable = |reason: String| LoadError::SourceUnavailable {
        source_name: source_name.to_string(),
        reason,
    };

    let document: Value = serde_json::from_str(text).map_err(|e| unavailable(e.to_string()))?;
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(unavailable(format!(
                "expected a JSON array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    let records = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog { records })
}

fn parse_record(index: usize, entry: &Value) -> Result<ItemRecord> {
    let malformed = |reason: String| LoadError::MalformedRecord { index, reason };

    if !entry.is_object() {
        return Err(malformed(format!(
            "expected an object, found {}",
            json_kind(entry)
        )));
    }

    let raw = RawRecord::deserialize(entry).map_err(|e| malformed(e.to_string()))?;

    let item_code = match raw.item {
        RawValue::Text(code) => code,
        RawValue::Number(n) => n.to_string(),
    };
    let reference_price =
        coerce_price("store_cession_price", raw.store_cession_price).map_err(malformed)?;
    let sales_price = coerce_price("sales_price", raw.sales_price).map_err(malformed)?;

    Ok(ItemRecord {
        item_code,
        reference_price,
        sales_price,
    })
}

/// Coerce a raw price field to a finite `f64`
fn coerce_price(field: &str, value: Option<RawValue>) -> std::result::Result<f64, String> {
    let parsed = match value {
        None => return Err(format!("missing field `{}`", field)),
        Some(RawValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("`{}` is out of range: {}", field, n))?,
        Some(RawValue::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("`{}` is not a number: {:?}", field, text))?,
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("`{}` is not finite: {}", field, parsed))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
