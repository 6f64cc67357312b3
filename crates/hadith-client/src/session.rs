//! Session: a [`SearchController`] wired to a [`SearchApi`].
//!
//! Front ends call the transition methods in response to user input and
//! either [`Session::pump`] on every tick (the TUI) or await
//! [`Session::settle`] (tests, scripted use). All controller mutation happens
//! on the caller's thread.

use crate::api::SearchApi;
use crate::dispatch::{ApiEvent, Dispatcher};
use hadith_core::{Dispatch, PageSize, SearchController, Trigger};
use std::time::Duration;

pub struct Session<A> {
    controller: SearchController,
    dispatcher: Dispatcher<A>,
}

impl<A: SearchApi> Session<A> {
    pub fn new(api: A, debounce: Duration, page_size: PageSize) -> Self {
        Self {
            controller: SearchController::new(page_size),
            dispatcher: Dispatcher::new(api, debounce),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn api(&self) -> &A {
        self.dispatcher.api()
    }

    /// Load the filter options and aggregate count in the background.
    pub fn start(&self) {
        tracing::debug!("session: loading catalog");
        self.dispatcher.spawn_catalog();
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn query_changed(&mut self, text: impl Into<String>) {
        let trigger = self.controller.on_query_changed(text);
        self.drive(trigger);
    }

    pub fn filter_changed(&mut self, value: Option<String>) {
        let trigger = self.controller.on_filter_changed(value);
        self.drive(trigger);
    }

    pub fn page_size_changed(&mut self, page_size: PageSize) {
        let trigger = self.controller.on_page_size_changed(page_size);
        self.drive(trigger);
    }

    pub fn submit(&mut self) {
        let trigger = self.controller.on_submit();
        self.drive(trigger);
    }

    pub fn prev_page(&mut self) {
        let trigger = self.controller.on_prev_page();
        self.drive(trigger);
    }

    pub fn next_page(&mut self) {
        let trigger = self.controller.on_next_page();
        self.drive(trigger);
    }

    pub fn goto_page(&mut self, page: u32) {
        let trigger = self.controller.on_goto_page(page);
        self.drive(trigger);
    }

    fn drive(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::None => {}
            Trigger::Debounced => self.dispatcher.schedule_debounced(),
            Trigger::Immediate => self.fetch_now(),
        }
    }

    fn fetch_now(&mut self) {
        if let Dispatch::Issue { ticket, request } = self.controller.begin_fetch() {
            self.dispatcher.spawn_search(ticket, request);
        }
    }

    // -----------------------------------------------------------------------
    // Event intake
    // -----------------------------------------------------------------------

    /// Fold one background outcome into the controller. Returns whether the
    /// visible state changed.
    pub fn handle(&mut self, event: ApiEvent) -> bool {
        match event {
            ApiEvent::DebounceElapsed(_) => {
                self.fetch_now();
                true
            }
            ApiEvent::SearchSettled { ticket, result } => self.controller.apply(ticket, result),
            ApiEvent::CatalogLoaded(catalog) => {
                self.controller.apply_catalog(catalog);
                true
            }
        }
    }

    /// Handle every event that is ready now. Returns whether anything changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.dispatcher.try_next() {
            changed |= self.handle(event);
        }
        changed
    }

    /// Wait for the next event and handle it. Returns `false` if the event
    /// channel is closed.
    pub async fn settle(&mut self) -> bool {
        match self.dispatcher.next().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    /// Nothing is scheduled or in flight.
    pub fn is_idle(&self) -> bool {
        !self.controller.is_loading() && !self.dispatcher.debounce_pending()
    }
}
