//! Session harness: controller + debouncer + dispatcher on paused time.
//!
//! # What this covers
//!
//! - **Debounce**: a burst of edits inside the window yields exactly one
//!   request, carrying the final text.
//! - **Empty state**: blank text with no filter never reaches the API and
//!   clears any previous results.
//! - **Ordering**: a slow response that settles after a newer one is dropped.
//! - **Degradation**: a failing search shows "No results"; a failing catalog
//!   half leaves its counter unset.
//! - **Paging and filters**: clamping at both ends, immediate fetches, and
//!   the browsing summary.
//!
//! # Running
//!
//! ```sh
//! cargo test --test session_harness
//! ```

mod common;
use common::*;

use hadith_client::Session;
use hadith_core::PageSize;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;

fn session(api: &FakeSearchApi) -> Session<FakeSearchApi> {
    Session::new(api.clone(), DEBOUNCE, PageSize::default())
}

fn summary(session: &Session<FakeSearchApi>) -> String {
    session.controller().view().summary
}

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn burst_of_edits_issues_one_request_with_final_text() {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    for text in ["s", "sa", "sab", "saba", "sabar"] {
        session.query_changed(text);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(api.searches().is_empty(), "fired inside the debounce window");

    drain(&mut session).await;
    let searches = api.searches();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].text, "sabar");
    assert_eq!(searches[0].page, 1);
    assert_eq!(summary(&session), "Showing 1–10 of 25");
}

#[tokio::test(start_paused = true)]
async fn edits_further_apart_than_the_window_each_fetch() {
    let api = FakeSearchApi::with_total(5);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;
    session.query_changed("ikhlas");
    drain(&mut session).await;

    let texts: Vec<_> = api.searches().into_iter().map(|r| r.text).collect();
    assert_eq!(texts, ["sabar", "ikhlas"]);
}

// ---------------------------------------------------------------------------
// Empty state
// ---------------------------------------------------------------------------

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(start_paused = true)]
async fn blank_query_without_filter_makes_no_call(#[case] text: &str) {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    session.query_changed(text);
    drain(&mut session).await;
    session.submit();
    drain(&mut session).await;

    assert!(api.searches().is_empty());
    assert_eq!(session.controller().results().total, 0);
    assert_eq!(summary(&session), "No results");
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_clears_results() {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;
    assert_eq!(session.controller().results().items.len(), 10);

    session.query_changed("");
    drain(&mut session).await;
    assert!(session.controller().results().items.is_empty());
    assert_eq!(api.searches().len(), 1);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn stale_response_is_discarded() {
    let api = FakeSearchApi::with_total(25);
    api.delay("slow", Duration::from_millis(500));
    api.delay("fast", Duration::from_millis(10));
    let mut session = session(&api);

    // "slow" is issued first and settles last.
    session.query_changed("slow");
    assert!(session.settle().await); // debounce -> slow in flight
    session.query_changed("fast");
    drain(&mut session).await;
    assert_eq!(session.controller().results().items[0].hadith.id, "fast 1");

    // Let the slow response arrive; it must not overwrite.
    tokio::time::sleep(Duration::from_millis(600)).await;
    session.pump();
    assert_eq!(session.controller().results().items[0].hadith.id, "fast 1");
    assert_eq!(api.searches().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn response_after_clearing_is_discarded() {
    let api = FakeSearchApi::with_total(25);
    api.delay("slow", Duration::from_millis(500));
    let mut session = session(&api);

    session.query_changed("slow");
    assert!(session.settle().await);
    session.query_changed("");
    drain(&mut session).await;

    tokio::time::sleep(Duration::from_millis(600)).await;
    session.pump();
    assert!(session.controller().results().items.is_empty());
    assert_eq!(summary(&session), "No results");
}

// ---------------------------------------------------------------------------
// Degradation
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn failing_search_shows_no_results() {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;
    assert_eq!(session.controller().results().total, 25);

    api.fail_search(true);
    session.submit();
    drain(&mut session).await;

    let view = session.controller().view();
    assert!(view.items.is_empty());
    assert_eq!(view.summary, "No results");
    assert!(!view.prev_enabled && !view.next_enabled);
}

#[rstest]
#[case(true, false)]
#[case(false, true)]
#[case(true, true)]
#[tokio::test(start_paused = true)]
async fn catalog_halves_fail_independently(#[case] fail_books: bool, #[case] fail_count: bool) {
    let api = FakeSearchApi::with_total(25)
        .books(BOOKS)
        .count(HADITH_COUNT);
    api.fail_books(fail_books);
    api.fail_count(fail_count);
    let mut session = session(&api);

    session.start();
    assert!(session.settle().await);

    let catalog = session.controller().catalog();
    assert_eq!(catalog.book_count().is_none(), fail_books);
    assert_eq!(catalog.hadith_count.is_none(), fail_count);

    // Searching still works.
    session.query_changed("sabar");
    drain(&mut session).await;
    assert_eq!(summary(&session), "Showing 1–10 of 25");
}

#[tokio::test(start_paused = true)]
async fn catalog_keeps_server_order() {
    let api = FakeSearchApi::with_total(0).books(BOOKS).count(HADITH_COUNT);
    let mut session = session(&api);

    session.start();
    assert!(session.settle().await);
    assert_eq!(session.controller().catalog().books(), BOOKS);
    assert_eq!(session.controller().catalog().hadith_count, Some(HADITH_COUNT));
}

// ---------------------------------------------------------------------------
// Paging and filters
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn paging_is_clamped_at_both_ends() {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;

    session.prev_page();
    assert!(session.is_idle(), "prev on page 1 must not fetch");

    session.next_page();
    drain(&mut session).await;
    session.next_page();
    drain(&mut session).await;
    assert_eq!(summary(&session), "Showing 21–25 of 25");
    assert!(!session.controller().view().next_enabled);

    session.next_page();
    assert!(session.is_idle(), "next on the last page must not fetch");
    let pages: Vec<_> = api.searches().into_iter().map(|r| r.page).collect();
    assert_eq!(pages, [1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn filter_alone_browses_immediately() {
    let api = FakeSearchApi::with_total(25);
    let mut session = session(&api);

    session.filter_changed(Some("muslim".to_string()));
    assert!(!session.is_idle(), "filter change fetches without debounce");
    drain(&mut session).await;

    assert_eq!(api.searches()[0].book.as_deref(), Some("muslim"));
    assert_eq!(summary(&session), "Browsing muslim: 1–10 of 25");
}

#[tokio::test(start_paused = true)]
async fn empty_browse_summary() {
    let api = FakeSearchApi::with_total(0);
    let mut session = session(&api);

    session.filter_changed(Some("malik".to_string()));
    drain(&mut session).await;
    assert_eq!(summary(&session), "Browsing malik: no items");
}

#[tokio::test(start_paused = true)]
async fn page_size_change_resets_to_first_page() {
    let api = FakeSearchApi::with_total(120);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;
    session.next_page();
    drain(&mut session).await;
    assert_eq!(session.controller().query().page(), 2);

    session.page_size_changed(PageSize::new(50).unwrap());
    drain(&mut session).await;
    let last = api.searches().pop().unwrap();
    assert_eq!((last.page, last.page_size), (1, 50));
    assert_eq!(summary(&session), "Showing 1–50 of 120");
}

#[tokio::test(start_paused = true)]
async fn goto_page_fetches_that_page() {
    let api = FakeSearchApi::with_total(100);
    let mut session = session(&api);

    session.query_changed("sabar");
    drain(&mut session).await;
    session.goto_page(7);
    drain(&mut session).await;
    assert_eq!(summary(&session), "Showing 61–70 of 100");
}
