//! Builders for search-response items as they arrive on the wire.
//!
//! The service is inconsistent about key casing, so the builder can emit
//! either spelling per field.

use serde_json::{json, Map, Value};

/// Fluent builder for one `/search` item.
///
/// ```rust,ignore
/// let item = ItemJson::new("bukhari", 1).capitalised().score(2.5).build();
/// ```
pub struct ItemJson {
    book: String,
    number: Value,
    id: String,
    arab: String,
    score: Option<Value>,
    capitalised: bool,
}

impl ItemJson {
    pub fn new(book: &str, number: u64) -> Self {
        Self {
            book: book.to_string(),
            number: json!(number),
            id: format!("{book} hadith {number}"),
            arab: "حديث".to_string(),
            score: None,
            capitalised: false,
        }
    }

    /// Use `Hadith`, `Book`, ... instead of the lowercase keys.
    pub fn capitalised(mut self) -> Self {
        self.capitalised = true;
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(json!(score));
        self
    }

    /// Send the number as a string, as some deployments do.
    pub fn number_as_string(mut self) -> Self {
        self.number = Value::String(self.number.to_string());
        self
    }

    pub fn build(self) -> Value {
        let key = |lower: &str| {
            if self.capitalised {
                let mut chars = lower.chars();
                chars
                    .next()
                    .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            } else {
                lower.to_string()
            }
        };

        let mut hadith = Map::new();
        hadith.insert(key("book"), json!(self.book));
        hadith.insert(key("number"), self.number.clone());
        hadith.insert(key("id"), json!(self.id));
        hadith.insert(key("arab"), json!(self.arab));

        let mut item = Map::new();
        item.insert(key("hadith"), Value::Object(hadith));
        if let Some(score) = &self.score {
            item.insert(key("score"), score.clone());
        }
        Value::Object(item)
    }
}

/// A `/search` body of `n` lowercase items from `book`.
pub fn search_body(book: &str, n: u64) -> Value {
    Value::Array((1..=n).map(|i| ItemJson::new(book, i).build()).collect())
}
