//! Headless simulated-annealing solver for the travelling salesman problem.
//!
//! The engine is made of small, independently usable pieces:
//!
//! - **Tour** ([`tour`]): node coordinates, a precomputed
//!   [`WeightTable`](tour::WeightTable), and a
//!   [`TourState`](tour::TourState) that prices 2-opt moves from their two
//!   boundary edges and keeps its cost cached incrementally.
//! - **Schedules** ([`schedule`]): linear and geometric-ratio cooling
//!   sequences generated before the run.
//! - **Simulated Annealing** ([`sa`]): the Metropolis loop, one step per
//!   temperature, with optional cost trace, edge-change notifications and
//!   cooperative cancellation.
//! - **Sweeps** ([`sweep`]): averaged traces over many seeded runs for
//!   comparing cooling ratios.
//!
//! # Quick start
//!
//! ```
//! use tsp_anneal::sa::{AnnealConfig, AnnealRunner};
//! use tsp_anneal::schedule::TemperatureSchedule;
//! use tsp_anneal::tour::Node;
//!
//! let nodes = [Node::new(0, 0), Node::new(1, 1), Node::new(0, 1), Node::new(1, 0)];
//! let schedule = TemperatureSchedule::ratio(Node::bounding_diagonal(&nodes), 0.95, 2000)?;
//! let config = AnnealConfig::default().with_seed(42).with_trace(true);
//!
//! let solution = AnnealRunner::solve(&nodes, &schedule, &config)?;
//! assert!((solution.cost() - 4.0).abs() < 1e-9);
//! # Ok::<(), tsp_anneal::TspError>(())
//! ```
//!
//! # Architecture
//!
//! Everything runs synchronously on the caller's thread. Randomness is
//! always passed in or seeded explicitly, never drawn from ambient state
//! during a run. Rendering, persistence and editing of nodes are left to
//! the caller, which consumes the returned cost trace and the
//! [`EdgeEvent`](tour::EdgeEvent) stream.

mod error;
pub mod sa;
pub mod schedule;
pub mod sweep;
pub mod tour;

pub use error::{Result, TspError};
