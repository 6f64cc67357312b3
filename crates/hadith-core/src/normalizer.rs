//! Normalizer: maps raw API JSON into canonical [`SearchHit`] values.
//!
//! The API is inconsistent about key casing: the outer keys of a search hit
//! come back as `Hadith`/`Score` from some deployments and `hadith`/`score`
//! from others, and the inner keys vary the same way. This is the only place
//! that knows about it. Each field is looked up under its lowercase spelling
//! first, then its capitalised one; the first present, non-null value wins.
//!
//! Individual fields are read leniently (a missing `number` leaves it
//! `None`), but the overall shape is not: a search body that is not an array
//! is a [`NormalizeError::NotAnArray`].

use crate::types::{Hadith, SearchHit};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
    #[error("response has no numeric `count` field")]
    MissingCount,
}

/// Normalize a `/search` response body.
pub fn hits_from_value(body: &Value) -> Result<Vec<SearchHit>, NormalizeError> {
    match body {
        Value::Array(items) => Ok(items.iter().map(hit_from_value).collect()),
        other => Err(NormalizeError::NotAnArray(kind(other))),
    }
}

/// Normalize one search hit. Never fails; unknown shapes yield empty fields.
pub fn hit_from_value(value: &Value) -> SearchHit {
    let Some(obj) = value.as_object() else {
        return SearchHit::default();
    };
    SearchHit {
        hadith: pick(obj, "hadith", "Hadith")
            .map(hadith_from_value)
            .unwrap_or_default(),
        score: pick(obj, "score", "Score").and_then(as_f64),
    }
}

/// Normalize a bare hadith object (as served by `/hadith/{book}/{number}`).
pub fn hadith_from_value(value: &Value) -> Hadith {
    let Some(obj) = value.as_object() else {
        return Hadith::default();
    };
    Hadith {
        book: pick(obj, "book", "Book").map(as_text).unwrap_or_default(),
        number: pick(obj, "number", "Number").and_then(as_u64),
        id: pick(obj, "id", "Id").map(as_text).unwrap_or_default(),
        arab: pick(obj, "arab", "Arab").map(as_text).unwrap_or_default(),
    }
}

/// Normalize a `/books` response body. Non-string entries are stringified.
pub fn books_from_value(body: &Value) -> Result<Vec<String>, NormalizeError> {
    match body {
        Value::Array(items) => Ok(items.iter().map(as_text).collect()),
        other => Err(NormalizeError::NotAnArray(kind(other))),
    }
}

/// Normalize a `/count` response body: `{ "count": <non-negative integer> }`.
pub fn count_from_value(body: &Value) -> Result<u64, NormalizeError> {
    body.get("count")
        .and_then(Value::as_u64)
        .ok_or(NormalizeError::MissingCount)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn pick<'a>(obj: &'a Map<String, Value>, lower: &str, upper: &str) -> Option<&'a Value> {
    [lower, upper]
        .into_iter()
        .filter_map(|k| obj.get(k))
        .find(|v| !v.is_null())
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Non-negative integers, whole floats (`7.0`) and numeric strings.
fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn whole(f: f64) -> Option<u64> {
    (f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
