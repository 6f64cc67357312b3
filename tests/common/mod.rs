//! Shared test utilities for the hadith integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Session helpers are deterministic under
//! `#[tokio::test(start_paused = true)]`.
#![allow(dead_code)]

pub mod builders;
pub mod fake_hadith_api;
pub mod fake_search_api;
pub mod fixtures;

pub use builders::*;
pub use fake_hadith_api::{FakeHadithApi, Reply};
pub use fake_search_api::FakeSearchApi;
pub use fixtures::*;

use hadith_client::{SearchApi, Session};
use std::time::Duration;

/// Debounce delay used by every session harness.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle events until nothing is scheduled or in flight.
pub async fn drain<A: SearchApi>(session: &mut Session<A>) {
    while !session.is_idle() {
        assert!(session.settle().await, "event channel closed");
    }
}
