//! Problem-agnostic local search.
//!
//! Provides generic implementations of single-solution local search
//! strategies over user-defined problems:
//!
//! - **Hill Climbing**: best, first, random, and worst choice variants
//!   with random-restart escapes from local optima.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under an
//!   exponential cooling schedule, with random-restart, perturbation, and
//!   reheat escapes.
//! - **Graph Coloring**: a ready-made problem with Kempe-chain and
//!   single-vertex recolor neighborhoods and a registry of goals.
//!
//! # Architecture
//!
//! Problems implement the contracts in [`problem`]. Algorithms implement
//! [`search::LocalSearch`] and are driven by [`search::SearchRunner`],
//! which owns the current and best states. Nothing in the search layer
//! knows about graphs; [`graph_coloring`] is just one consumer.

pub mod error;
pub mod graph_coloring;
pub mod hill_climbing;
pub mod problem;
mod random;
pub mod sa;
pub mod search;

pub use error::{LocalSearchError, Result};
