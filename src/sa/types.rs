//! Run outputs.

use crate::tour::NodeId;

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Cached tour cost after the last step.
    pub final_cost: f64,

    /// Tour cost recorded before each step, when requested. Has one entry
    /// per executed step (the full schedule length unless cancelled).
    pub trace: Option<Vec<f64>>,

    /// Number of steps executed.
    pub steps: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

impl AnnealResult {
    /// Fraction of steps whose move was accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.steps as f64
        }
    }
}

/// Everything a caller needs after solving from raw nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final closed tour (first node repeated at the end).
    pub tour: Vec<NodeId>,

    /// Run statistics and optional trace.
    pub result: AnnealResult,

    /// The temperatures the run used, aligned with `result.trace`.
    pub temperatures: Vec<f64>,
}

impl Solution {
    pub fn cost(&self) -> f64 {
        self.result.final_cost
    }
}
