//! Simulated Annealing (SA) over 2-opt tour moves.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The loop is driven by a precomputed [`TemperatureSchedule`]: exactly one
//! move is proposed per temperature, and the run ends when the schedule is
//! exhausted.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//!
//! [`TemperatureSchedule`]: crate::schedule::TemperatureSchedule

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{acceptance_probability, create_rng, AnnealRunner};
pub use types::{AnnealResult, Solution};
