//! Core types for hadith-core.
//!
//! This module defines the canonical records every other layer works with:
//! the [`Hadith`] entity, a scored [`SearchHit`], the [`ResultPage`] returned
//! by one search request, and the startup [`Catalog`].

use serde::Serialize;

/// A single hadith as served by the API.
///
/// Produced only by [`crate::normalizer`]; fields missing from the response
/// are left empty rather than failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hadith {
    /// Collection the hadith belongs to (the filter value).
    pub book: String,
    /// Sequence number within the collection.
    pub number: Option<u64>,
    /// Translation text.
    pub id: String,
    /// Arabic source text, rendered right-to-left.
    pub arab: String,
}

/// One search result: the matched hadith plus its relevance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchHit {
    pub hadith: Hadith,
    pub score: Option<f64>,
}

impl SearchHit {
    /// The score worth showing. Zero, absent and non-finite scores are hidden.
    pub fn visible_score(&self) -> Option<f64> {
        self.score.filter(|s| s.is_finite() && *s != 0.0)
    }
}

/// The current page of results. Replaced wholesale on every applied response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPage {
    pub items: Vec<SearchHit>,
    /// Total matches reported by the server. May disagree with `items.len()`.
    pub total: u64,
}

impl ResultPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.total == 0
    }
}

/// Startup data: the filter options and the aggregate hadith count.
///
/// `None` means "not loaded" (still pending, or the request failed) and is
/// rendered as a placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub books: Option<Vec<String>>,
    pub hadith_count: Option<u64>,
}

impl Catalog {
    /// Filter options in the order the server returned them.
    pub fn books(&self) -> &[String] {
        self.books.as_deref().unwrap_or(&[])
    }

    pub fn book_count(&self) -> Option<usize> {
        self.books.as_ref().map(Vec::len)
    }

    /// The filter value next to `current` when cycling the selector.
    ///
    /// The cycle is `[no filter, books[0], books[1], …]` and wraps in both
    /// directions. A `current` value that is not in the list is treated as
    /// "no filter".
    pub fn neighbor(&self, current: Option<&str>, forward: bool) -> Option<String> {
        let books = self.books();
        // Slot 0 is "no filter"; slot i + 1 is books[i].
        let slots = books.len() + 1;
        let at = current
            .and_then(|c| books.iter().position(|b| b == c))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (at + 1) % slots
        } else {
            (at + slots - 1) % slots
        };
        next.checked_sub(1).map(|i| books[i].clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
