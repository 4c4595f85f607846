//! Annealing run configuration.

use crate::tour::MoveStrategy;

/// Configuration for one annealing run.
///
/// The temperature schedule is passed separately; this only controls how
/// the run is observed and how randomness is seeded.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
/// use tsp_anneal::tour::MoveStrategy;
///
/// let config = AnnealConfig::default()
///     .with_strategy(MoveStrategy::RandomNeighborPair)
///     .with_trace(true)
///     .with_notify_edges(false)
///     .with_seed(42);
/// assert!(config.record_trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Move strategy for tours built by [`AnnealRunner::solve`] and the
    /// sweep helpers. Ignored by [`AnnealRunner::run`], which uses the
    /// strategy the tour was created with.
    ///
    /// [`AnnealRunner::solve`]: super::AnnealRunner::solve
    /// [`AnnealRunner::run`]: super::AnnealRunner::run
    pub strategy: MoveStrategy,

    /// Record the tour cost before every step.
    pub record_trace: bool,

    /// Forward edge changes to the tour's listener during the run.
    pub notify_edges: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            strategy: MoveStrategy::default(),
            record_trace: false,
            notify_edges: true,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_strategy(mut self, strategy: MoveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn with_notify_edges(mut self, notify: bool) -> Self {
        self.notify_edges = notify;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
