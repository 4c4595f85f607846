//! Repeated-run trace averaging.

use crate::error::Result;
use crate::sa::{AnnealConfig, AnnealRunner};
use crate::schedule::TemperatureSchedule;
use crate::tour::{MoveStrategy, TourState, WeightTable};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cooling ratios compared by default.
pub const DEFAULT_TEST_RATIOS: [f64; 6] = [0.2, 0.4, 0.6, 0.8, 0.9, 0.95];

/// Independent runs averaged per ratio by default.
pub const DEFAULT_TEST_RUNS: usize = 25;

/// Mean cost trace for one cooling ratio.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatioTrial {
    pub ratio: f64,
    /// Element-wise mean of the per-run cost traces.
    pub mean_trace: Vec<f64>,
}

impl RatioTrial {
    /// Mean cost at the last recorded step.
    pub fn final_mean(&self) -> Option<f64> {
        self.mean_trace.last().copied()
    }
}

/// Runs `runs` independent anneals from the input order and returns the
/// element-wise mean of their cost traces.
///
/// Run `i` is seeded with `seed + i`, so the result is reproducible, with
/// or without the `parallel` feature. All runs share `weights`. Edge
/// notifications are never emitted. Returns an empty trace when `runs` is
/// zero.
///
/// # Errors
///
/// [`TspError::TooFewNodes`](crate::TspError::TooFewNodes) if `weights`
/// covers fewer than three nodes.
pub fn average_trace(
    weights: &WeightTable,
    strategy: MoveStrategy,
    schedule: &TemperatureSchedule,
    runs: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    if runs == 0 {
        return Ok(Vec::new());
    }

    let run = |i: usize| traced_run(weights, strategy, schedule, seed.wrapping_add(i as u64));

    #[cfg(feature = "parallel")]
    let traces = (0..runs).into_par_iter().map(run).collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let traces = (0..runs).map(run).collect::<Result<Vec<_>>>()?;

    let mut mean = vec![0.0; schedule.len()];
    for trace in &traces {
        for (acc, cost) in mean.iter_mut().zip(trace) {
            *acc += cost;
        }
    }
    let n = runs as f64;
    mean.iter_mut().for_each(|v| *v /= n);
    Ok(mean)
}

/// Averages traces for several geometric cooling ratios sharing the same
/// start temperature and step count.
///
/// Every ratio uses the same seeds, so differences between trials come from
/// the schedule alone.
///
/// # Errors
///
/// [`TspError::InvalidSchedule`](crate::TspError::InvalidSchedule) for a
/// bad `start` or ratio, and the errors of [`average_trace`].
pub fn compare_ratios(
    weights: &WeightTable,
    strategy: MoveStrategy,
    start: f64,
    ratios: &[f64],
    num_steps: usize,
    runs: usize,
    seed: u64,
) -> Result<Vec<RatioTrial>> {
    ratios
        .iter()
        .map(|&ratio| {
            let schedule = TemperatureSchedule::ratio(start, ratio, num_steps)?;
            let mean_trace = average_trace(weights, strategy, &schedule, runs, seed)?;
            tracing::debug!(
                ratio,
                runs,
                final_mean = mean_trace.last().copied(),
                "ratio trial finished"
            );
            Ok(RatioTrial { ratio, mean_trace })
        })
        .collect()
}

fn traced_run(
    weights: &WeightTable,
    strategy: MoveStrategy,
    schedule: &TemperatureSchedule,
    seed: u64,
) -> Result<Vec<f64>> {
    let mut state = TourState::new(weights, strategy)?;
    let config = AnnealConfig::default()
        .with_strategy(strategy)
        .with_trace(true)
        .with_notify_edges(false)
        .with_seed(seed);
    let result = AnnealRunner::run(&mut state, schedule, &config);
    Ok(result.trace.unwrap_or_default())
}
