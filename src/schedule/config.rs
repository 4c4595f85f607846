//! Cooling schedule parameters.

use super::types::TemperatureSchedule;
use crate::error::Result;

/// Step count used when a schedule is built without an explicit one.
pub const DEFAULT_NUM_STEPS: usize = 1000;

/// Cooling ratio used by [`ScheduleConfig::ratio`].
pub const DEFAULT_RATIO: f64 = 0.9;

/// Parameters for generating a [`TemperatureSchedule`].
///
/// # Examples
///
/// ```
/// use tsp_anneal::schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::ratio(120.0)
///     .with_ratio(0.95)
///     .with_num_steps(2000);
/// let schedule = config.build().unwrap();
/// assert_eq!(schedule.len(), 2001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScheduleConfig {
    /// Linear decay from `max_distance / 5`, exactly `num_steps` values.
    Linear {
        /// Upper bound on a single edge, e.g. the working-area diagonal.
        max_distance: f64,
        num_steps: usize,
    },

    /// Geometric decay `T_{k+1} = ratio * T_k`, `num_steps + 1` values.
    Ratio {
        start: f64,
        /// Cooling factor in (0, 1). Higher = slower cooling.
        ratio: f64,
        num_steps: usize,
    },
}

impl ScheduleConfig {
    /// Linear schedule with [`DEFAULT_NUM_STEPS`].
    pub fn linear(max_distance: f64) -> Self {
        ScheduleConfig::Linear {
            max_distance,
            num_steps: DEFAULT_NUM_STEPS,
        }
    }

    /// Ratio schedule with [`DEFAULT_RATIO`] and [`DEFAULT_NUM_STEPS`].
    pub fn ratio(start: f64) -> Self {
        ScheduleConfig::Ratio {
            start,
            ratio: DEFAULT_RATIO,
            num_steps: DEFAULT_NUM_STEPS,
        }
    }

    pub fn with_num_steps(mut self, n: usize) -> Self {
        match &mut self {
            ScheduleConfig::Linear { num_steps, .. } | ScheduleConfig::Ratio { num_steps, .. } => {
                *num_steps = n
            }
        }
        self
    }

    /// Sets the cooling ratio. Has no effect on a linear schedule.
    pub fn with_ratio(mut self, r: f64) -> Self {
        if let ScheduleConfig::Ratio { ratio, .. } = &mut self {
            *ratio = r;
        }
        self
    }

    pub fn num_steps(&self) -> usize {
        match self {
            ScheduleConfig::Linear { num_steps, .. } | ScheduleConfig::Ratio { num_steps, .. } => {
                *num_steps
            }
        }
    }

    /// Validates the parameters without keeping the generated schedule.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Generates the schedule.
    pub fn build(&self) -> Result<TemperatureSchedule> {
        match *self {
            ScheduleConfig::Linear {
                max_distance,
                num_steps,
            } => TemperatureSchedule::linear(max_distance, num_steps),
            ScheduleConfig::Ratio {
                start,
                ratio,
                num_steps,
            } => TemperatureSchedule::ratio(start, ratio, num_steps),
        }
    }
}
