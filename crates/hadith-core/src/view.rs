//! View model: everything a front end needs to draw one frame.
//!
//! [`ResultsView::build`] is recomputed from scratch on every render; nothing
//! is diffed or cached between frames.

use crate::controller::SearchController;
use crate::pagination;
use crate::query::PageSize;
use crate::types::SearchHit;

/// One rendered result.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub book: String,
    /// Sequence number with its `#` prefix; `#` alone when unknown.
    pub number: String,
    /// `score: N`, or `None` when the score is zero or absent.
    pub score: Option<String>,
    pub id: String,
    pub arab: String,
    /// The `arab` line is right-to-left text.
    pub rtl: bool,
}

impl ItemView {
    pub fn from_hit(hit: &SearchHit) -> Self {
        let h = &hit.hadith;
        Self {
            book: h.book.clone(),
            number: match h.number {
                Some(n) => format!("#{n}"),
                None => "#".to_string(),
            },
            score: hit.visible_score().map(|s| format!("score: {s}")),
            id: h.id.clone(),
            arab: h.arab.clone(),
            rtl: true,
        }
    }
}

/// Summary line, pager state and the list of items.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub summary: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub page: u32,
    pub last_page: u64,
    pub items: Vec<ItemView>,
}

impl ResultsView {
    pub fn build(controller: &SearchController) -> Self {
        let query = controller.query();
        let results = controller.results();
        let page = query.page();
        let size = query.page_size();
        Self {
            summary: summary(results.total, page, size, query.trimmed_text(), query.filter()),
            prev_enabled: pagination::has_prev(page),
            next_enabled: pagination::has_next(page, results.total, size),
            page,
            last_page: pagination::last_page(results.total, size),
            items: results.items.iter().map(ItemView::from_hit).collect(),
        }
    }
}

/// The summary line above the pager.
///
/// A filter with no query text is "browsing" and gets the filter-qualified
/// phrasing in both the empty and non-empty cases.
pub fn summary(total: u64, page: u32, size: PageSize, text: &str, filter: Option<&str>) -> String {
    let browsing = filter.filter(|_| text.trim().is_empty());
    // Empty window: no results, or a page past the last one.
    let (start, end) = pagination::window(page, total, size);
    if start == 0 {
        return match browsing {
            Some(book) => format!("Browsing {book}: no items"),
            None => "No results".to_string(),
        };
    }
    match browsing {
        Some(book) => format!("Browsing {book}: {start}–{end} of {total}"),
        None => format!("Showing {start}–{end} of {total}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hadith;
    use pretty_assertions::assert_eq;

    fn ten() -> PageSize {
        PageSize::default()
    }

    #[test]
    fn summary_for_last_partial_page() {
        insta::assert_snapshot!(summary(25, 3, ten(), "sabar", None), @"Showing 21–25 of 25");
    }

    #[test]
    fn summary_when_browsing_a_book() {
        insta::assert_snapshot!(
            summary(25, 1, ten(), "", Some("bukhari")),
            @"Browsing bukhari: 1–10 of 25"
        );
    }

    #[test]
    fn summary_with_text_and_filter_is_not_browsing() {
        assert_eq!(summary(25, 1, ten(), "sabar", Some("bukhari")), "Showing 1–10 of 25");
    }

    #[test]
    fn empty_summaries() {
        assert_eq!(summary(0, 1, ten(), "", None), "No results");
        assert_eq!(summary(0, 1, ten(), "sabar", None), "No results");
        assert_eq!(summary(0, 1, ten(), "", Some("muslim")), "Browsing muslim: no items");
        assert_eq!(summary(0, 1, ten(), "sabar", Some("muslim")), "No results");
    }

    #[test]
    fn page_past_the_end_uses_the_empty_phrasing() {
        assert_eq!(summary(25, 9, ten(), "sabar", None), "No results");
        assert_eq!(summary(25, 4, ten(), "", Some("muslim")), "Browsing muslim: no items");
    }

    #[test]
    fn item_view_formats_number_and_score() {
        let hit = SearchHit {
            hadith: Hadith {
                book: "bukhari".into(),
                number: Some(1),
                id: "Sesungguhnya amal".into(),
                arab: "إنما الأعمال".into(),
            },
            score: Some(3.0),
        };
        let view = ItemView::from_hit(&hit);
        assert_eq!(view.number, "#1");
        assert_eq!(view.score.as_deref(), Some("score: 3"));
        assert!(view.rtl);
    }

    #[test]
    fn item_view_omits_zero_score_and_missing_number() {
        let view = ItemView::from_hit(&SearchHit { score: Some(0.0), ..Default::default() });
        assert_eq!(view.number, "#");
        assert_eq!(view.score, None);
    }
}
