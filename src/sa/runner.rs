//! SA execution loop.

use super::config::AnnealConfig;
use super::types::{AnnealResult, Solution};
use crate::error::Result;
use crate::schedule::TemperatureSchedule;
use crate::tour::{EdgeListener, Node, TourState, WeightTable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Creates the generator a run draws from.
///
/// A fixed seed always yields the same stream. Without one, the seed is
/// drawn from the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Metropolis acceptance probability for a move with cost change `delta` at
/// `temperature`.
///
/// Non-worsening moves (`delta <= 0`) are always accepted. For worsening
/// moves the result is `exp(-delta / T)`; anything that is not a finite
/// probability (zero or negative temperature, NaN, overflow) maps to `0.0`,
/// i.e. the move is rejected.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(-1.0, 0.0), 1.0);
/// assert!((acceptance_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
/// assert_eq!(acceptance_probability(1.0, 0.0), 0.0);
/// ```
#[inline]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    if !(temperature > 0.0) {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_finite() && p >= 0.0 {
        p.min(1.0)
    } else {
        0.0
    }
}

/// Executes simulated annealing over a [`TourState`].
///
/// One step per temperature, in schedule order:
///
/// 1. record the current cost (if tracing)
/// 2. propose a fresh 2-opt move
/// 3. apply it if `delta <= 0`, otherwise apply it with probability
///    `exp(-delta / T)` and discard it if rejected
///
/// A rejected move is abandoned; the next step proposes a new one. There is
/// no convergence check: the run ends when the schedule is exhausted or the
/// cancellation flag is raised.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs SA on `state`, seeding randomness from `config.seed`.
    pub fn run(
        state: &mut TourState<'_>,
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
    ) -> AnnealResult {
        Self::run_with_cancel(state, schedule, config, None)
    }

    /// Runs SA with an optional cancellation token, checked once per step.
    pub fn run_with_cancel(
        state: &mut TourState<'_>,
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(state, schedule, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing every random number from `rng`.
    ///
    /// `config.seed` and `config.strategy` are ignored here.
    pub fn run_with_rng<R: Rng>(
        state: &mut TourState<'_>,
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> AnnealResult {
        let previous_notify = state.set_notify(config.notify_edges);

        tracing::debug!(
            nodes = state.node_count(),
            steps = schedule.len(),
            strategy = ?state.strategy(),
            initial_cost = state.value(),
            "annealing started"
        );

        let mut trace = config
            .record_trace
            .then(|| Vec::with_capacity(schedule.len()));
        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        for &temperature in schedule {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            if let Some(trace) = trace.as_mut() {
                trace.push(state.value());
            }

            let delta = state.propose_move(rng);

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                true
            } else {
                let probability = acceptance_probability(delta, temperature);
                let u: f64 = rng.random();
                probability > 0.0 && u <= probability
            };

            if accept {
                state.apply_move();
                accepted_moves += 1;
                tracing::trace!(step = steps, temperature, delta, cost = state.value(), "accepted");
            } else {
                state.discard_move();
            }

            steps += 1;
        }

        state.set_notify(previous_notify);

        if cancelled {
            tracing::warn!(steps, of = schedule.len(), "annealing cancelled");
        }
        tracing::debug!(
            final_cost = state.value(),
            steps,
            accepted_moves,
            improving_moves,
            "annealing finished"
        );

        AnnealResult {
            final_cost: state.value(),
            trace,
            steps,
            accepted_moves,
            improving_moves,
            cancelled,
        }
    }

    /// Builds a tour over `nodes` in input order and anneals it.
    ///
    /// # Errors
    ///
    /// [`TspError::TooFewNodes`](crate::TspError::TooFewNodes) for fewer
    /// than three nodes.
    pub fn solve(
        nodes: &[Node],
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
    ) -> Result<Solution> {
        let weights = WeightTable::new(nodes)?;
        let mut state = TourState::new(&weights, config.strategy)?;
        Ok(Self::finish(&mut state, schedule, config))
    }

    /// Like [`solve`](Self::solve), reporting the initial tour and every
    /// edge change to `listener` (unless `config.notify_edges` is off).
    pub fn solve_with_listener<L: EdgeListener>(
        nodes: &[Node],
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
        listener: L,
    ) -> Result<Solution> {
        let weights = WeightTable::new(nodes)?;
        let mut state = TourState::new(&weights, config.strategy)?;
        state.set_notify(config.notify_edges);
        let mut state = state.with_listener(listener);
        Ok(Self::finish(&mut state, schedule, config))
    }

    fn finish(
        state: &mut TourState<'_>,
        schedule: &TemperatureSchedule,
        config: &AnnealConfig,
    ) -> Solution {
        let result = Self::run(state, schedule, config);
        Solution {
            tour: state.tour().to_vec(),
            result,
            temperatures: schedule.as_slice().to_vec(),
        }
    }
}
