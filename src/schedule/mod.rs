//! Cooling schedules.
//!
//! Temperatures are generated up front as a finite sequence; the annealing
//! loop runs exactly one step per temperature.
//!
//! - Linear: `T_k = T_0 - k * T_0 / steps`, with `T_0 = max_distance / 5`
//! - Ratio (geometric): `T_{k+1} = ratio * T_k`
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod types;

pub use config::{ScheduleConfig, DEFAULT_NUM_STEPS, DEFAULT_RATIO};
pub use types::TemperatureSchedule;
