//! In-memory [`SearchApi`] for session tests that run on paused tokio time.
//!
//! Serves a virtual collection of `total` hits per query, answers after a
//! configurable per-query delay, and records every call. Failures are toggled
//! per endpoint.

use axum::http::StatusCode;
use hadith_client::{ClientError, SearchApi};
use hadith_core::{pagination, Hadith, PageSize, ResultPage, SearchHit, SearchRequest};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Inner {
    total: AtomicU64,
    books: Mutex<Vec<String>>,
    count: AtomicU64,
    delays: Mutex<HashMap<String, Duration>>,
    searches: Mutex<Vec<SearchRequest>>,
    fail_search: AtomicBool,
    fail_books: AtomicBool,
    fail_count: AtomicBool,
}

/// Cheap to clone; clones share state, so keep one to inspect after handing
/// the other to a `Session`.
#[derive(Clone, Default)]
pub struct FakeSearchApi {
    inner: Arc<Inner>,
}

impl FakeSearchApi {
    /// A collection of `total` hits for any query.
    pub fn with_total(total: u64) -> Self {
        let api = Self::default();
        api.inner.total.store(total, Ordering::SeqCst);
        api
    }

    pub fn books(self, books: &[&str]) -> Self {
        *self.inner.books.lock().unwrap() = books.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn count(self, count: u64) -> Self {
        self.inner.count.store(count, Ordering::SeqCst);
        self
    }

    /// Answer searches for `text` only after `delay`.
    pub fn delay(&self, text: &str, delay: Duration) {
        self.inner
            .delays
            .lock()
            .unwrap()
            .insert(text.to_string(), delay);
    }

    pub fn fail_search(&self, fail: bool) {
        self.inner.fail_search.store(fail, Ordering::SeqCst);
    }

    pub fn fail_books(&self, fail: bool) {
        self.inner.fail_books.store(fail, Ordering::SeqCst);
    }

    pub fn fail_count(&self, fail: bool) {
        self.inner.fail_count.store(fail, Ordering::SeqCst);
    }

    /// Every search received, in call order.
    pub fn searches(&self) -> Vec<SearchRequest> {
        self.inner.searches.lock().unwrap().clone()
    }

    fn page(&self, request: &SearchRequest) -> ResultPage {
        let total = self.inner.total.load(Ordering::SeqCst);
        let size = PageSize::new(request.page_size).unwrap_or_default();
        let (start, end) = pagination::window(request.page, total, size);
        let book = request.book.clone().unwrap_or_else(|| "bukhari".to_string());
        let items = if start == 0 {
            Vec::new()
        } else {
            (start..=end)
                .map(|n| SearchHit {
                    hadith: Hadith {
                        book: book.clone(),
                        number: Some(n),
                        id: format!("{} {n}", request.text),
                        arab: "نص".to_string(),
                    },
                    score: Some(1.0),
                })
                .collect()
        };
        ResultPage { items, total }
    }
}

fn server_error() -> ClientError {
    ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

impl SearchApi for FakeSearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, ClientError> {
        self.inner.searches.lock().unwrap().push(request.clone());
        let delay = self.inner.delays.lock().unwrap().get(&request.text).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.inner.fail_search.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.page(request))
    }

    async fn books(&self) -> Result<Vec<String>, ClientError> {
        if self.inner.fail_books.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.inner.books.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<u64, ClientError> {
        if self.inner.fail_count.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.inner.count.load(Ordering::SeqCst))
    }

    async fn hadith(&self, book: &str, number: u64) -> Result<Hadith, ClientError> {
        Ok(Hadith {
            book: book.to_string(),
            number: Some(number),
            id: format!("hadith {number}"),
            arab: "نص".to_string(),
        })
    }
}
