//! Search sessions.
//!
//! A [`LocalSearch`] algorithm proposes the next state; [`SearchRunner`]
//! owns the current and best states, detects stalls, requests escapes,
//! and emits [`SearchObserver`] events. Randomness is the only source of
//! nondeterminism, so a seeded run is fully reproducible.

mod config;
mod runner;
mod types;

pub use config::AlgorithmConfig;
pub use runner::{SearchResult, SearchRunner, StopReason};
pub use types::{EscapeBudget, LocalSearch, SearchObserver, SearchProgress};
