//! Problem contracts.
//!
//! These traits decouple search strategies from problem representation.
//! A [`Problem`] owns the static instance data and a [`Goal`]; it hands
//! out a [`MoveGenerator`] that enumerates or samples [`Move`]s, and each
//! move produces a fresh state without touching its source.

mod types;

pub use types::{Goal, Move, MoveGenerator, Problem};
