//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), and escapes stalled searches by
//! random restart, perturbation, or reheating.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod annealing;
mod config;
mod schedule;

pub use annealing::{EscapeStrategy, SimulatedAnnealing};
pub use config::SimulatedAnnealingConfig;
pub use schedule::ExponentialSchedule;
