//! Dataset analytics: type histogram, duplicate detection and insights.

use std::collections::HashSet;

use crate::error::{Result, UtilError};
use crate::models::{now_rfc3339, Summary, TypeHistogram, Value};

/// Summarizes a non-empty dataset.
///
/// Duplicates compare numbers by value: `true`, `1` and `1.0` are the same
/// number, and `false` equals `0`. Ties for the most common type go to the
/// type seen first in `data`.
pub fn summarize(data: &[Value]) -> Result<Summary> {
    if data.is_empty() {
        return Err(UtilError::NoData);
    }

    let mut data_types = TypeHistogram::new();
    for item in data {
        data_types.record(item.type_name());
    }
    let most_common = data_types.most_common().ok_or(UtilError::NoData)?.to_string();

    let has_duplicates = contains_duplicates(data);

    let mut insights = vec![format!("Most common data type: {}", most_common)];
    if has_duplicates {
        insights.push("Dataset contains duplicate values".to_string());
    }

    Ok(Summary {
        total_items: data.len(),
        data_types,
        has_duplicates,
        insights,
        timestamp: now_rfc3339(),
    })
}

// == Duplicate Keys ==
/// Hashable form of a `Value` under numeric equality.
#[derive(Debug, PartialEq, Eq, Hash)]
enum DedupKey<'a> {
    Null,
    Int(i64),
    /// Raw bits of a float with no exact integer value
    Float(u64),
    Text(&'a str),
    List(Vec<DedupKey<'a>>),
    Map(Vec<(&'a str, DedupKey<'a>)>),
}

impl<'a> DedupKey<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => DedupKey::Null,
            Value::Bool(b) => DedupKey::Int(i64::from(*b)),
            Value::Int(n) => DedupKey::Int(*n),
            Value::Float(x) => float_key(*x),
            Value::Text(s) => DedupKey::Text(s),
            Value::List(items) => DedupKey::List(items.iter().map(DedupKey::of).collect()),
            Value::Map(entries) => DedupKey::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), DedupKey::of(v)))
                    .collect(),
            ),
        }
    }
}

// 2^63; i64::MAX itself is not representable as f64
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn float_key<'a>(x: f64) -> DedupKey<'a> {
    if x.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&x) {
        DedupKey::Int(x as i64)
    } else {
        DedupKey::Float(x.to_bits())
    }
}

fn contains_duplicates(data: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(data.len());
    data.iter()
        // NaN never equals anything, itself included
        .filter(|item| !matches!(item, Value::Float(x) if x.is_nan()))
        .any(|item| !seen.insert(DedupKey::of(item)))
}
