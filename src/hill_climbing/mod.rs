//! Hill climbing.
//!
//! | Variant | Sampling | Selection |
//! |---|---|---|
//! | [`BestChoiceHillClimbing`] | full neighborhood | largest improvement |
//! | [`FirstChoiceHillClimbing`] | random draws, up to a trial limit | first improving draw |
//! | [`RandomChoiceHillClimbing`] | one random draw | the draw, if it improves |
//! | [`WorstChoiceHillClimbing`] | full neighborhood | smallest positive improvement |
//!
//! Ties in best/worst choice go to the neighbor enumerated first.

mod climbers;
mod neighborhood;

pub use climbers::{
    BestChoiceHillClimbing, FirstChoiceHillClimbing, RandomChoiceHillClimbing,
    WorstChoiceHillClimbing,
};
