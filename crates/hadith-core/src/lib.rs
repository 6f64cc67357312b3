//! hadith-core: shared types and search state for the hadith client.
//!
//! Nothing in this crate performs I/O. It holds the data model, the
//! normalizer that turns loosely-cased API responses into canonical records,
//! and the [`SearchController`] state machine that every front end drives.
//!
//! # Architecture
//!
//! ```text
//! input ──► SearchController ──► Trigger ──► (client) request
//!                ▲                                  │
//!                └──────────── apply(ticket) ◄──────┘
//! ```
//!
//! The client crate owns the network and the timers; the TUI owns the
//! terminal. Both talk to the controller only through its transitions.

pub mod config;
pub mod controller;
pub mod normalizer;
pub mod pagination;
pub mod query;
pub mod types;
pub mod view;

pub use controller::{Dispatch, SearchController, Ticket, Trigger};
pub use query::{PageSize, QueryState, SearchRequest};
pub use types::{Catalog, Hadith, ResultPage, SearchHit};
pub use view::{ItemView, ResultsView};
