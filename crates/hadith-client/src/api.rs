//! The search service seam and its HTTP implementation.
//!
//! # Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/search?q=&page=&page_size=[&book=]` | array of hits, `X-Total-Count` header |
//! | `GET` | `/books` | array of book names |
//! | `GET` | `/count` | `{ "count": N }` |
//! | `GET` | `/hadith/{book}/{number}` | one hadith |

use crate::error::ClientError;
use bytes::Bytes;
use hadith_core::normalizer;
use hadith_core::{Hadith, ResultPage, SearchRequest};
use http_body_util::{BodyExt, Empty};
use hyper::header::HeaderMap;
use hyper::Uri;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Response header carrying the total number of matches.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Operations the client needs from the search service.
///
/// Implementations must be cheap to share: the dispatcher keeps one behind an
/// `Arc` and calls it from spawned tasks.
pub trait SearchApi: Send + Sync + 'static {
    /// One page of results. The total falls back to the item count when the
    /// server does not report one.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<ResultPage, ClientError>> + Send;

    /// Available filter values, in server order.
    fn books(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;

    /// Aggregate number of hadiths across all books.
    fn count(&self) -> impl Future<Output = Result<u64, ClientError>> + Send;

    /// A single hadith by book and number.
    fn hadith(
        &self,
        book: &str,
        number: u64,
    ) -> impl Future<Output = Result<Hadith, ClientError>> + Send;
}

// ---------------------------------------------------------------------------
// HttpApi
// ---------------------------------------------------------------------------

/// [`SearchApi`] over plain HTTP using hyper's pooled client.
#[derive(Clone)]
pub struct HttpApi {
    client: Client<HttpConnector, Empty<Bytes>>,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpApi {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:8080`).
    ///
    /// Only `http://` URLs are accepted. A trailing `/` is ignored; a path
    /// prefix is kept and the endpoint paths are appended to it.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let invalid = |reason: String| ClientError::BaseUrl {
            url: base_url.clone(),
            reason,
        };

        let uri: Uri = base_url.parse().map_err(|e| invalid(format!("{e}")))?;
        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => {
                return Err(invalid(format!("unsupported scheme {other:?}, only http is supported")))
            }
            None => return Err(invalid("missing scheme".to_string())),
        }
        if uri.host().is_none() {
            return Err(invalid("missing host".to_string()));
        }

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Ok(Self {
            client,
            base_url,
            timeout: None,
        })
    }

    /// Give up on requests that take longer than `timeout`. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path_and_query: &str) -> Result<(HeaderMap, Bytes), ClientError> {
        let uri: Uri = format!("{}{}", self.base_url, path_and_query).parse()?;
        let exchange = async {
            let response = self.client.get(uri).await?;
            let status = response.status();
            tracing::debug!(path = path_and_query, status = %status, "api: response");
            if !status.is_success() {
                return Err(ClientError::Status(status));
            }
            let (parts, body) = response.into_parts();
            let bytes = body.collect().await?.to_bytes();
            Ok::<_, ClientError>((parts.headers, bytes))
        };
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| ClientError::Timeout(limit))?,
            None => exchange.await,
        }
    }

    async fn get_json(&self, path_and_query: &str) -> Result<(HeaderMap, Value), ClientError> {
        let (headers, body) = self.get(path_and_query).await?;
        Ok((headers, serde_json::from_slice(&body)?))
    }
}

impl SearchApi for HttpApi {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, ClientError> {
        let (headers, body) = self.get_json(&request.path_and_query()).await?;
        let items = normalizer::hits_from_value(&body)?;
        let total = total_from_headers(&headers).unwrap_or(items.len() as u64);
        Ok(ResultPage { items, total })
    }

    async fn books(&self) -> Result<Vec<String>, ClientError> {
        let (_, body) = self.get_json("/books").await?;
        Ok(normalizer::books_from_value(&body)?)
    }

    async fn count(&self) -> Result<u64, ClientError> {
        let (_, body) = self.get_json("/count").await?;
        Ok(normalizer::count_from_value(&body)?)
    }

    async fn hadith(&self, book: &str, number: u64) -> Result<Hadith, ClientError> {
        let path = format!("/hadith/{}/{number}", urlencoding::encode(book));
        let (_, body) = self.get_json(&path).await?;
        Ok(normalizer::hadith_from_value(&body))
    }
}

/// Parse `X-Total-Count`. `None` when the header is absent or not a
/// non-negative integer.
pub fn total_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
