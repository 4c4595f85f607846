//! Precomputed pairwise distances.

use super::types::{Node, NodeId};
use crate::error::{Result, TspError};

/// Symmetric table of Euclidean distances between every pair of nodes.
///
/// Built once per run in O(n²) time and space, then only read. A table can
/// be shared by any number of [`TourState`](super::TourState)s, including
/// ones running on different threads.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tour::{Node, WeightTable};
///
/// let nodes = [Node::new(0, 0), Node::new(3, 4)];
/// let table = WeightTable::new(&nodes).unwrap();
/// assert_eq!(table.weight(0, 1), 5.0);
/// assert_eq!(table.weight(1, 0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    len: usize,
    // Row-major n x n, mirrored across the diagonal.
    weights: Vec<f64>,
}

impl WeightTable {
    /// Minimum number of nodes a table can be built from.
    pub const MIN_NODES: usize = 2;

    /// Builds the table from node coordinates.
    ///
    /// # Errors
    ///
    /// [`TspError::TooFewNodes`] if fewer than two nodes are supplied.
    pub fn new(nodes: &[Node]) -> Result<Self> {
        let len = nodes.len();
        if len < Self::MIN_NODES {
            return Err(TspError::TooFewNodes {
                found: len,
                required: Self::MIN_NODES,
            });
        }

        let mut weights = vec![0.0; len * len];
        for i in 0..len {
            for j in (i + 1)..len {
                let d = nodes[i].distance(&nodes[j]);
                weights[i * len + j] = d;
                weights[j * len + i] = d;
            }
        }

        tracing::debug!(nodes = len, "built weight table");
        Ok(Self { len, weights })
    }

    /// Number of nodes covered by the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance between `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    #[inline]
    pub fn weight(&self, a: NodeId, b: NodeId) -> f64 {
        assert!(
            a < self.len && b < self.len,
            "node pair ({a}, {b}) out of range for {} nodes",
            self.len
        );
        self.weights[a * self.len + b]
    }

    /// Checked variant of [`weight`](Self::weight).
    pub fn try_weight(&self, a: NodeId, b: NodeId) -> Result<f64> {
        for node in [a, b] {
            if node >= self.len {
                return Err(TspError::NodeOutOfRange {
                    node,
                    len: self.len,
                });
            }
        }
        Ok(self.weights[a * self.len + b])
    }

    /// Longest single edge in the table.
    pub fn max_weight(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Total weight of a path visiting `sequence` in order.
    ///
    /// Pass a closed sequence (first node repeated at the end) to get the
    /// cost of a cycle.
    pub fn path_cost(&self, sequence: &[NodeId]) -> f64 {
        sequence.windows(2).map(|w| self.weight(w[0], w[1])).sum()
    }
}
