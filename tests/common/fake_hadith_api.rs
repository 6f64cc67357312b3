//! Fake search service over real HTTP.
//!
//! Spins up a minimal `axum` server on a random port bound to 127.0.0.1 and
//! serves `/search`, `/books`, `/count` and `/hadith/{book}/{number}` with
//! canned [`Reply`]s that each test configures. Every request is recorded so
//! tests can assert on the exact query string the client sent.
//!
//! ```rust,ignore
//! let server = FakeHadithApi::start().await.unwrap();
//! server.set_search(Reply::json(fixtures::search_body(3)).total("57")).await;
//! let api = HttpApi::new(&server.base_url()).unwrap();
//! ```

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub total: Option<String>,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self::raw(body.to_string())
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            total: None,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::raw("")
        }
    }

    /// Send an `X-Total-Count` header with this literal value.
    pub fn total(mut self, value: impl Into<String>) -> Self {
        self.total = Some(value.into());
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One request the server received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    /// Undecoded query string, exactly as sent.
    pub raw_query: Option<String>,
}

impl Recorded {
    /// Decoded query parameters.
    pub fn params(&self) -> HashMap<String, String> {
        self.raw_query
            .as_deref()
            .unwrap_or("")
            .split('&')
            .filter(|kv| !kv.is_empty())
            .map(|kv| {
                let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
                let decode = |s: &str| urlencoding::decode(s).map(|d| d.into_owned());
                (decode(k).unwrap(), decode(v).unwrap())
            })
            .collect()
    }
}

struct ApiState {
    search: Reply,
    books: Reply,
    count: Reply,
    hadith: Reply,
    requests: Vec<Recorded>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            search: Reply::json(serde_json::json!([])).total("0"),
            books: Reply::json(serde_json::json!([])),
            count: Reply::json(serde_json::json!({ "count": 0 })),
            hadith: Reply::status(StatusCode::NOT_FOUND),
            requests: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<ApiState>>;

/// Handle to the running fake server.
pub struct FakeHadithApi {
    addr: SocketAddr,
    state: Shared,
}

impl FakeHadithApi {
    /// Start on a random port. Returns once the server is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::default();

        let app = Router::new()
            .route("/search", get(search))
            .route("/books", get(books))
            .route("/count", get(count))
            .route("/hadith/{book}/{number}", get(hadith))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// e.g. `http://127.0.0.1:PORT`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_search(&self, reply: Reply) {
        self.state.lock().await.search = reply;
    }

    pub async fn set_books(&self, reply: Reply) {
        self.state.lock().await.books = reply;
    }

    pub async fn set_count(&self, reply: Reply) {
        self.state.lock().await.count = reply;
    }

    pub async fn set_hadith(&self, reply: Reply) {
        self.state.lock().await.hadith = reply;
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.lock().await.requests.clone()
    }

    /// Requests made to `path` only.
    pub async fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn respond(
    state: &Shared,
    path: String,
    raw_query: Option<String>,
    pick: fn(&ApiState) -> Reply,
) -> Response {
    let reply = {
        let mut state = state.lock().await;
        state.requests.push(Recorded { path, raw_query });
        pick(&state)
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let mut response = (reply.status, reply.body).into_response();
    if let Some(total) = reply.total {
        response.headers_mut().insert(
            "x-total-count",
            HeaderValue::from_str(&total).expect("valid header value"),
        );
    }
    response
}

async fn search(State(state): State<Shared>, RawQuery(query): RawQuery) -> Response {
    respond(&state, "/search".to_string(), query, |s| s.search.clone()).await
}

async fn books(State(state): State<Shared>) -> Response {
    respond(&state, "/books".to_string(), None, |s| s.books.clone()).await
}

async fn count(State(state): State<Shared>) -> Response {
    respond(&state, "/count".to_string(), None, |s| s.count.clone()).await
}

async fn hadith(
    State(state): State<Shared>,
    Path((book, number)): Path<(String, String)>,
) -> impl IntoResponse {
    respond(&state, format!("/hadith/{book}/{number}"), None, |s| s.hadith.clone()).await
}
