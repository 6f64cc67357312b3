//! Static response bodies shared across harnesses.

use serde_json::{json, Value};

pub const BOOKS: &[&str] = &[
    "abu-daud",
    "ahmad",
    "bukhari",
    "darimi",
    "ibnu-majah",
    "malik",
    "muslim",
    "nasai",
    "tirmidzi",
];

pub const HADITH_COUNT: u64 = 62169;

pub fn books_body() -> Value {
    json!(BOOKS)
}

pub fn count_body() -> Value {
    json!({ "count": HADITH_COUNT })
}

/// One hadith as served by `/hadith/{book}/{number}`, capitalised keys.
pub fn hadith_body() -> Value {
    json!({
        "Book": "muslim",
        "Number": 7,
        "Id": "Sesungguhnya amal itu tergantung niatnya",
        "Arab": "إنما الأعمال بالنيات",
    })
}

/// Bodies that are valid JSON but not a list of items.
pub const NON_ARRAY_BODIES: &[&str] = &[
    r#"{"items": []}"#,
    r#""sabar""#,
    "42",
    "null",
];
