//! Debounce timer and request dispatch.
//!
//! Every asynchronous outcome (a debounce timer firing, a search settling,
//! the startup catalog arriving) is reported as an [`ApiEvent`] on a single
//! unbounded channel. The owner drains it from the UI thread, so no state is
//! ever shared with the spawned tasks.
//!
//! Must be used from within a tokio runtime context.

use crate::api::SearchApi;
use crate::error::ClientError;
use hadith_core::{Catalog, ResultPage, SearchRequest, Ticket};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Outcome of a background task.
#[derive(Debug)]
pub enum ApiEvent {
    /// The debounce timer with this generation elapsed.
    DebounceElapsed(u64),
    /// A search stamped with `ticket` finished.
    SearchSettled {
        ticket: Ticket,
        result: Result<ResultPage, ClientError>,
    },
    /// Startup data; failed halves are left as `None`.
    CatalogLoaded(Catalog),
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Single-shot timer that restarts on every [`Debouncer::schedule`].
///
/// Scheduling aborts the pending timer task, so only the last call of a burst
/// produces an [`ApiEvent::DebounceElapsed`]. A timer that fired concurrently
/// with its own cancellation is caught by [`Debouncer::fire`], which only
/// accepts the current, still-pending generation.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// A timer is running.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// (Re)start the timer; it reports on `tx` when it elapses.
    pub fn schedule(&mut self, tx: &mpsc::UnboundedSender<ApiEvent>) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let tx = tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ApiEvent::DebounceElapsed(generation));
        }));
        tracing::debug!(generation, delay_ms = delay.as_millis() as u64, "debounce: scheduled");
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "debounce: cancelled");
        }
    }

    /// Accept an elapsed event. Returns `false` for superseded or cancelled
    /// timers.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            tracing::debug!(generation, current = self.generation, "debounce: stale timer ignored");
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Spawns API calls and timers, and hands their outcomes back in order of
/// arrival.
pub struct Dispatcher<A> {
    api: Arc<A>,
    tx: mpsc::UnboundedSender<ApiEvent>,
    rx: mpsc::UnboundedReceiver<ApiEvent>,
    debouncer: Debouncer,
}

impl<A: SearchApi> Dispatcher<A> {
    pub fn new(api: A, debounce: Duration) -> Self {
        Self::from_arc(Arc::new(api), debounce)
    }

    pub fn from_arc(api: Arc<A>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            tx,
            rx,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn schedule_debounced(&mut self) {
        self.debouncer.schedule(&self.tx);
    }

    pub fn cancel_debounce(&mut self) {
        self.debouncer.cancel();
    }

    /// Run `request` in the background and report it under `ticket`.
    /// In-flight requests are never cancelled.
    pub fn spawn_search(&self, ticket: Ticket, request: SearchRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.search(&request).await;
            let _ = tx.send(ApiEvent::SearchSettled { ticket, result });
        });
    }

    /// Fetch the book list and the aggregate count concurrently.
    pub fn spawn_catalog(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let (books, count) = tokio::join!(api.books(), api.count());
            let catalog = Catalog {
                books: books
                    .inspect_err(|e| tracing::debug!(error = %e, "catalog: books unavailable"))
                    .ok(),
                hadith_count: count
                    .inspect_err(|e| tracing::debug!(error = %e, "catalog: count unavailable"))
                    .ok(),
            };
            let _ = tx.send(ApiEvent::CatalogLoaded(catalog));
        });
    }

    /// Next ready event without waiting.
    pub fn try_next(&mut self) -> Option<ApiEvent> {
        while let Ok(event) = self.rx.try_recv() {
            if let Some(event) = self.accept(event) {
                return Some(event);
            }
        }
        None
    }

    /// Wait for the next event.
    pub async fn next(&mut self) -> Option<ApiEvent> {
        while let Some(event) = self.rx.recv().await {
            if let Some(event) = self.accept(event) {
                return Some(event);
            }
        }
        None
    }

    fn accept(&mut self, event: ApiEvent) -> Option<ApiEvent> {
        match event {
            ApiEvent::DebounceElapsed(generation) if !self.debouncer.fire(generation) => None,
            other => Some(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
