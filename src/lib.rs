//! hadith: terminal search client for a remote hadith collection.
//!
//! The workspace is split the same way the runtime is:
//!
//! ```text
//! hadith-core    data model, normalizer, SearchController (no I/O)
//! hadith-client  HTTP API, debounce timer, Session
//! hadith-tui     ratatui front end
//! hadith         this crate: CLI entry point and one-shot commands
//! ```

pub mod cli;
