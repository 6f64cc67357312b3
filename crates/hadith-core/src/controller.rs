//! The search controller: owner of all UI search state.
//!
//! Every user action is a transition method that mutates the state and
//! returns a [`Trigger`] describing what the driver has to do next. The
//! controller never sleeps or performs I/O; the client crate turns triggers
//! into timers and requests and feeds the outcome back through
//! [`SearchController::apply`].
//!
//! # Request ordering
//!
//! Each fetch is stamped with a [`Ticket`] from a monotonically increasing
//! counter. Only the most recently issued ticket may change the results; a
//! slow response that resolves after a newer request was issued is dropped.

use crate::pagination;
use crate::query::{PageSize, QueryState, SearchRequest};
use crate::types::{Catalog, ResultPage};
use crate::view::ResultsView;
use std::fmt::Display;

/// Sequence number of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What the driver must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Nothing changed that needs a fetch.
    None,
    /// (Re)start the debounce timer; fetch when it elapses.
    Debounced,
    /// Fetch now.
    Immediate,
}

/// Result of [`SearchController::begin_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing was asked; results were cleared without a request.
    Skipped,
    /// Send `request` and report back with `ticket`.
    Issue {
        ticket: Ticket,
        request: SearchRequest,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: QueryState,
    results: ResultPage,
    catalog: Catalog,
    /// Last ticket handed out.
    issued: u64,
    /// Ticket of the request whose response is still awaited, if any.
    pending: Option<Ticket>,
    /// Bumped every time `results` is replaced.
    revision: u64,
}

impl SearchController {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: QueryState::new(page_size),
            ..Default::default()
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self) -> &ResultPage {
        &self.results
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A request has been issued and its response has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Changes whenever the result set is replaced, even by an identical one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> ResultsView {
        ResultsView::build(self)
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn on_query_changed(&mut self, text: impl Into<String>) -> Trigger {
        self.query.set_text(text.into());
        tracing::debug!(text = %self.query.text(), "controller: query changed");
        Trigger::Debounced
    }

    /// `None` or a blank value clears the filter.
    pub fn on_filter_changed(&mut self, value: Option<String>) -> Trigger {
        self.query.set_filter(value);
        tracing::debug!(filter = ?self.query.filter(), "controller: filter changed");
        Trigger::Immediate
    }

    pub fn on_page_size_changed(&mut self, page_size: PageSize) -> Trigger {
        self.query.set_page_size(page_size);
        tracing::debug!(page_size = %page_size, "controller: page size changed");
        Trigger::Immediate
    }

    /// Explicit submit (Enter in the query input): back to page 1, fetch now.
    pub fn on_submit(&mut self) -> Trigger {
        self.query.set_page(1);
        tracing::debug!("controller: submit");
        Trigger::Immediate
    }

    pub fn on_prev_page(&mut self) -> Trigger {
        let page = self.query.page();
        if !pagination::has_prev(page) {
            return Trigger::None;
        }
        self.query.set_page(page - 1);
        tracing::debug!(page = self.query.page(), "controller: prev page");
        Trigger::Immediate
    }

    pub fn on_next_page(&mut self) -> Trigger {
        let page = self.query.page();
        if !pagination::has_next(page, self.results.total, self.query.page_size()) {
            return Trigger::None;
        }
        self.query.set_page(page + 1);
        tracing::debug!(page = self.query.page(), "controller: next page");
        Trigger::Immediate
    }

    /// Jump straight to `page`. Only the lower bound is enforced: the total
    /// may not be known yet, and the server answers out-of-range pages with an
    /// empty list.
    pub fn on_goto_page(&mut self, page: u32) -> Trigger {
        let page = page.max(1);
        if page == self.query.page() {
            return Trigger::None;
        }
        self.query.set_page(page);
        tracing::debug!(page, "controller: goto page");
        Trigger::Immediate
    }

    // -----------------------------------------------------------------------
    // Fetch lifecycle
    // -----------------------------------------------------------------------

    /// Start a fetch for the current state.
    ///
    /// Always issues a new ticket, so any response still in flight becomes
    /// stale, including when nothing is asked and the results are simply
    /// cleared.
    pub fn begin_fetch(&mut self) -> Dispatch {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        match self.query.search_request() {
            None => {
                tracing::debug!(ticket = ticket.0, "controller: nothing asked, clearing results");
                self.results = ResultPage::empty();
                self.revision += 1;
                self.pending = None;
                Dispatch::Skipped
            }
            Some(request) => {
                tracing::debug!(ticket = ticket.0, request = ?request, "controller: fetch issued");
                self.pending = Some(ticket);
                Dispatch::Issue { ticket, request }
            }
        }
    }

    /// Apply the outcome of the fetch stamped `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` is not the
    /// latest issued one. Errors of any kind clear the results.
    pub fn apply<E: Display>(&mut self, ticket: Ticket, result: Result<ResultPage, E>) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "controller: stale response discarded"
            );
            return false;
        }
        self.pending = None;
        self.results = match result {
            Ok(page) => {
                tracing::debug!(
                    ticket = ticket.0,
                    items = page.items.len(),
                    total = page.total,
                    "controller: results applied"
                );
                page
            }
            Err(err) => {
                tracing::warn!(ticket = ticket.0, error = %err, "search failed; showing empty results");
                ResultPage::empty()
            }
        };
        self.revision += 1;
        true
    }

    pub fn apply_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(
            books = ?catalog.book_count(),
            hadiths = ?catalog.hadith_count,
            "controller: catalog loaded"
        );
        self.catalog = catalog;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
