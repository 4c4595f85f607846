//! Tour representation for the travelling salesman problem.
//!
//! A run starts from a list of [`Node`]s. A [`WeightTable`] precomputes all
//! pairwise distances once, and a [`TourState`] holds the current closed
//! tour over those nodes. The tour changes only through 2-opt moves: a
//! [`MoveStrategy`] picks a range, [`TourState::propose_move`] prices the
//! reversal from its two boundary edges, and the caller either applies or
//! discards it.
//!
//! # Key Types
//!
//! - [`Node`]: integer coordinates; identity is the index in the node list
//! - [`WeightTable`]: symmetric distance table, shareable across threads
//! - [`TourState`]: closed tour, cached cost, pending move, edge listener
//! - [`MoveStrategy`]: how the next range to reverse is chosen
//! - [`EdgeListener`]: sink for [`EdgeEvent`]s
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod state;
mod strategy;
mod types;
mod weights;

pub use state::{PendingMove, TourState};
pub use strategy::MoveStrategy;
pub use types::{ChangeKind, ChannelListener, EdgeEvent, EdgeListener, Node, NodeId};
pub use weights::WeightTable;
