//! Error type shared by all construction-time checks.
//!
//! Only invariant violations detected while building a run are reported
//! here. Numeric edge cases inside the annealing loop (for example an
//! acceptance probability that underflows) are handled in place and never
//! surface as errors.

use std::fmt;

/// Errors raised while building weight tables, tours, or schedules.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// Not enough nodes to build the requested structure.
    TooFewNodes {
        /// Number of nodes supplied.
        found: usize,
        /// Minimum number of nodes required.
        required: usize,
    },

    /// A move strategy was asked to pick a range from fewer than two
    /// interior tour positions.
    DegenerateMoveSpace {
        /// Number of interior positions available.
        interior: usize,
    },

    /// A node appears more than once in a tour order.
    DuplicateNode {
        /// The repeated node id.
        node: usize,
    },

    /// Temperature schedule parameters are out of range.
    InvalidSchedule(String),

    /// A node id that the weight table does not cover.
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the weight table.
        len: usize,
    },
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::TooFewNodes { found, required } => write!(
                f,
                "invalid configuration: {found} node(s) supplied, at least {required} required"
            ),
            TspError::DegenerateMoveSpace { interior } => write!(
                f,
                "no 2-opt move exists with {interior} interior tour position(s), need at least 2"
            ),
            TspError::DuplicateNode { node } => {
                write!(f, "node {node} appears more than once in the tour")
            }
            TspError::InvalidSchedule(msg) => write!(f, "invalid temperature schedule: {msg}"),
            TspError::NodeOutOfRange { node, len } => {
                write!(f, "node {node} is out of range for a table of {len} nodes")
            }
        }
    }
}

impl std::error::Error for TspError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
