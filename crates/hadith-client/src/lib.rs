//! hadith-client: network and scheduling layer for hadith.
//!
//! [`SearchApi`] is the seam between the search state and the remote
//! service. [`HttpApi`] implements it over hyper; tests substitute in-memory
//! fakes. [`Session`] binds a [`hadith_core::SearchController`] to an API,
//! turning controller triggers into debounced or immediate requests and
//! folding the responses back in. All results travel over a `tokio` channel
//! so the UI thread never awaits the network.

pub mod api;
pub mod dispatch;
pub mod error;
pub mod session;

pub use api::{HttpApi, SearchApi};
pub use dispatch::{ApiEvent, Debouncer, Dispatcher};
pub use error::ClientError;
pub use session::Session;
