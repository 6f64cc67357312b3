//! Query state and the `/search` request it produces.

use std::fmt;

/// Page sizes the interface offers.
pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

/// Page size used when input is missing, malformed or not in [`PAGE_SIZES`].
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ---------------------------------------------------------------------------
// PageSize
// ---------------------------------------------------------------------------

/// A page size guaranteed to be one of [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Accept `n` only if it is an offered page size.
    pub fn new(n: u32) -> Option<Self> {
        PAGE_SIZES.contains(&n).then_some(Self(n))
    }

    /// Parse user input, falling back to [`DEFAULT_PAGE_SIZE`].
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The next offered size, wrapping around.
    pub fn next(self) -> Self {
        let i = self.index();
        Self(PAGE_SIZES[(i + 1) % PAGE_SIZES.len()])
    }

    /// The previous offered size, wrapping around.
    pub fn prev(self) -> Self {
        let i = self.index();
        Self(PAGE_SIZES[(i + PAGE_SIZES.len() - 1) % PAGE_SIZES.len()])
    }

    fn index(self) -> usize {
        PAGE_SIZES.iter().position(|&n| n == self.0).unwrap_or(0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// QueryState
// ---------------------------------------------------------------------------

/// What the user is currently asking for.
///
/// Fields are private so that `page >= 1` holds everywhere; mutation goes
/// through [`crate::SearchController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    text: String,
    filter: Option<String>,
    page: u32,
    page_size: PageSize,
}

impl QueryState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            text: String::new(),
            filter: None,
            page: 1,
            page_size,
        }
    }

    /// Query text exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query text with surrounding whitespace removed; what gets sent.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// A filter is active and there is no query text ("browse" mode).
    pub fn is_browsing(&self) -> bool {
        self.filter.is_some() && self.trimmed_text().is_empty()
    }

    /// The request this state maps to, or `None` when nothing is asked.
    pub fn search_request(&self) -> Option<SearchRequest> {
        let text = self.trimmed_text();
        if text.is_empty() && self.filter.is_none() {
            return None;
        }
        Some(SearchRequest {
            text: text.to_string(),
            page: self.page,
            page_size: self.page_size.get(),
            book: self.filter.clone(),
        })
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.page = 1;
    }

    /// Empty or whitespace-only values clear the filter.
    pub(crate) fn set_filter(&mut self, value: Option<String>) {
        self.filter = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        self.page = 1;
    }

    pub(crate) fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

// ---------------------------------------------------------------------------
// SearchRequest
// ---------------------------------------------------------------------------

/// One `/search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub text: String,
    pub page: u32,
    pub page_size: u32,
    pub book: Option<String>,
}

impl SearchRequest {
    /// Query parameters in wire order. `book` is omitted when unset.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.text.clone()),
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(book) = self.book.as_deref().filter(|b| !b.is_empty()) {
            pairs.push(("book", book.to_string()));
        }
        pairs
    }

    /// `/search?…` with every value percent-encoded.
    pub fn path_and_query(&self) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("/search?{query}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
