//! Incrementally evaluated tour with a single pending 2-opt move.

use super::strategy::MoveStrategy;
use super::types::{EdgeEvent, EdgeListener, NodeId};
use super::weights::WeightTable;
use crate::error::{Result, TspError};
use rand::Rng;
use std::fmt;

/// A proposed reversal of `tour[start..=end]` together with the cost change
/// applying it would cause.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingMove {
    pub start: usize,
    pub end: usize,
    pub delta: f64,
}

/// The current closed tour, its cached cost, and the move machinery.
///
/// The tour is stored closed: `n + 1` positions where the first and last
/// hold the same node. Moves never touch those two positions, so the start
/// node stays fixed for the whole run.
///
/// The cached cost is maintained incrementally. It starts as a full
/// recomputation and afterwards only changes by the delta of each applied
/// move; it is never recomputed implicitly.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tsp_anneal::tour::{MoveStrategy, Node, TourState, WeightTable};
///
/// let nodes = [Node::new(0, 0), Node::new(1, 1), Node::new(0, 1), Node::new(1, 0)];
/// let table = WeightTable::new(&nodes).unwrap();
/// let mut state = TourState::new(&table, MoveStrategy::BothRandom).unwrap();
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let delta = state.propose_move(&mut rng);
/// let before = state.value();
/// state.apply_move();
/// assert!((state.value() - (before + delta)).abs() < 1e-12);
/// ```
pub struct TourState<'w> {
    weights: &'w WeightTable,
    tour: Vec<NodeId>,
    cost: f64,
    strategy: MoveStrategy,
    pending: Option<PendingMove>,
    listener: Option<Box<dyn EdgeListener + 'w>>,
    notify: bool,
}

impl<'w> TourState<'w> {
    /// Fewest nodes for which a 2-opt move exists.
    pub const MIN_NODES: usize = 3;

    /// Creates a tour visiting every node of `weights` in input order.
    ///
    /// # Errors
    ///
    /// [`TspError::TooFewNodes`] when the table holds fewer than
    /// [`MIN_NODES`](Self::MIN_NODES) nodes.
    pub fn new(weights: &'w WeightTable, strategy: MoveStrategy) -> Result<Self> {
        Self::with_order(weights, (0..weights.len()).collect(), strategy)
    }

    /// Creates a tour visiting `order` (open, without the closing
    /// duplicate).
    ///
    /// # Errors
    ///
    /// - [`TspError::TooFewNodes`] if `order` has fewer than
    ///   [`MIN_NODES`](Self::MIN_NODES) entries.
    /// - [`TspError::NodeOutOfRange`] if an id is not in `weights`.
    /// - [`TspError::DuplicateNode`] if an id appears twice.
    pub fn with_order(
        weights: &'w WeightTable,
        order: Vec<NodeId>,
        strategy: MoveStrategy,
    ) -> Result<Self> {
        if order.len() < Self::MIN_NODES {
            return Err(TspError::TooFewNodes {
                found: order.len(),
                required: Self::MIN_NODES,
            });
        }

        let mut seen = vec![false; weights.len()];
        for &node in &order {
            if node >= weights.len() {
                return Err(TspError::NodeOutOfRange {
                    node,
                    len: weights.len(),
                });
            }
            if std::mem::replace(&mut seen[node], true) {
                return Err(TspError::DuplicateNode { node });
            }
        }

        let mut tour = order;
        tour.push(tour[0]);
        let cost = weights.path_cost(&tour);

        Ok(Self {
            weights,
            tour,
            cost,
            strategy,
            pending: None,
            listener: None,
            notify: true,
        })
    }

    /// Attaches an edge listener and immediately reports every edge of the
    /// current tour as added.
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: EdgeListener + 'w,
    {
        self.listener = Some(Box::new(listener));
        if self.notify {
            for i in 0..self.tour.len() - 1 {
                self.emit(EdgeEvent::added(self.tour[i], self.tour[i + 1]));
            }
        }
        self
    }

    /// Enables or disables listener notifications. Returns the previous
    /// setting.
    pub fn set_notify(&mut self, notify: bool) -> bool {
        std::mem::replace(&mut self.notify, notify)
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Cached total cost of the closed tour.
    #[inline]
    pub fn value(&self) -> f64 {
        self.cost
    }

    /// Total cost computed from scratch, ignoring the cache.
    pub fn recompute_cost(&self) -> f64 {
        self.weights.path_cost(&self.tour)
    }

    /// The closed tour: `n + 1` node ids, first and last equal.
    pub fn tour(&self) -> &[NodeId] {
        &self.tour
    }

    /// The tour without its closing duplicate.
    pub fn order(&self) -> &[NodeId] {
        &self.tour[..self.tour.len() - 1]
    }

    /// Number of distinct nodes in the tour.
    pub fn node_count(&self) -> usize {
        self.tour.len() - 1
    }

    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    pub fn weights(&self) -> &'w WeightTable {
        self.weights
    }

    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Picks a new range to reverse and returns the cost delta of reversing
    /// it. Only the two boundary edges are evaluated.
    ///
    /// Any previously pending move is replaced.
    pub fn propose_move<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let (start, end) = self.strategy.pick(self.tour.len() - 2, rng);
        let t = &self.tour;
        let w = self.weights;

        let old = w.weight(t[start - 1], t[start]) + w.weight(t[end], t[end + 1]);
        let new = w.weight(t[start - 1], t[end]) + w.weight(t[start], t[end + 1]);
        let delta = new - old;

        self.pending = Some(PendingMove { start, end, delta });
        delta
    }

    /// Reverses the pending range and adds its delta to the cached cost.
    ///
    /// Listeners see the two boundary edges removed before the reversal and
    /// the two new boundary edges added after it. Returns `false` if no move
    /// was pending.
    pub fn apply_move(&mut self) -> bool {
        let Some(PendingMove { start, end, delta }) = self.pending.take() else {
            return false;
        };

        self.emit_boundary(start, end, EdgeEvent::removed);
        self.tour[start..=end].reverse();
        self.cost += delta;
        self.emit_boundary(start, end, EdgeEvent::added);
        true
    }

    /// Drops the pending move without touching the tour.
    pub fn discard_move(&mut self) {
        self.pending = None;
    }

    fn emit_boundary(&mut self, start: usize, end: usize, make: fn(NodeId, NodeId) -> EdgeEvent) {
        if self.listener.is_none() || !self.notify {
            return;
        }
        let first = make(self.tour[start - 1], self.tour[start]);
        let second = make(self.tour[end], self.tour[end + 1]);
        self.emit(first);
        self.emit(second);
    }

    fn emit(&mut self, event: EdgeEvent) {
        if !self.notify {
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_edge(event);
        }
    }
}

impl fmt::Debug for TourState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourState")
            .field("tour", &self.tour)
            .field("cost", &self.cost)
            .field("strategy", &self.strategy)
            .field("pending", &self.pending)
            .field("has_listener", &self.listener.is_some())
            .field("notify", &self.notify)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{ChangeKind, Node};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn square() -> WeightTable {
        WeightTable::new(&[
            Node::new(0, 0),
            Node::new(0, 1),
            Node::new(1, 1),
            Node::new(1, 0),
        ])
        .unwrap()
    }

    fn scattered(n: usize) -> WeightTable {
        let nodes: Vec<Node> = (0..n as i32)
            .map(|i| Node::new((i * 37) % 101, (i * 59) % 97))
            .collect();
        WeightTable::new(&nodes).unwrap()
    }

    fn is_permutation(state: &TourState<'_>, n: usize) -> bool {
        let mut order = state.order().to_vec();
        order.sort_unstable();
        order == (0..n).collect::<Vec<_>>() && state.tour()[0] == state.tour()[n]
    }

    #[test]
    fn test_rejects_small_tours() {
        let two = WeightTable::new(&[Node::new(0, 0), Node::new(1, 1)]).unwrap();
        assert!(matches!(
            TourState::new(&two, MoveStrategy::BothRandom),
            Err(TspError::TooFewNodes {
                found: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn test_rejects_bad_orders() {
        let table = square();
        assert_eq!(
            TourState::with_order(&table, vec![0, 1, 1, 2], MoveStrategy::BothRandom).err(),
            Some(TspError::DuplicateNode { node: 1 })
        );
        assert_eq!(
            TourState::with_order(&table, vec![0, 1, 9], MoveStrategy::BothRandom).err(),
            Some(TspError::NodeOutOfRange { node: 9, len: 4 })
        );
    }

    #[test]
    fn test_initial_tour_is_closed_input_order() {
        let table = square();
        let state = TourState::new(&table, MoveStrategy::BothRandom).unwrap();
        assert_eq!(state.tour(), &[0, 1, 2, 3, 0]);
        assert_eq!(state.order(), &[0, 1, 2, 3]);
        assert!((state.value() - 4.0).abs() < 1e-12);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_delta_matches_recomputation() {
        let table = scattered(12);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for strategy in [MoveStrategy::BothRandom, MoveStrategy::RandomNeighborPair] {
            let mut state = TourState::new(&table, strategy).unwrap();
            for _ in 0..500 {
                let before = state.recompute_cost();
                let delta = state.propose_move(&mut rng);
                assert!(state.apply_move());
                let after = state.recompute_cost();
                assert!(
                    (after - before - delta).abs() < 1e-9,
                    "delta {delta} but cost moved {}",
                    after - before
                );
                assert!((state.value() - after).abs() < 1e-6);
                assert!(is_permutation(&state, 12));
            }
        }
    }

    #[test]
    fn test_apply_without_pending_is_noop() {
        let table = square();
        let mut state = TourState::new(&table, MoveStrategy::BothRandom).unwrap();
        assert!(!state.apply_move());
        assert_eq!(state.tour(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_discard_is_true_noop() {
        let table = scattered(8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut state = TourState::new(&table, MoveStrategy::BothRandom).unwrap();

        state.propose_move(&mut rng);
        state.apply_move();
        let tour = state.tour().to_vec();
        let cost = state.value();

        state.propose_move(&mut rng);
        state.discard_move();

        assert_eq!(state.tour(), tour.as_slice());
        assert_eq!(state.value(), cost);
        assert!(state.pending().is_none());
        assert!(!state.apply_move());
    }

    #[test]
    fn test_zero_cost_tour_stays_cached() {
        let table = WeightTable::new(&[Node::new(5, 5); 4]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = TourState::new(&table, MoveStrategy::BothRandom).unwrap();
        assert_eq!(state.value(), 0.0);
        state.propose_move(&mut rng);
        state.apply_move();
        assert_eq!(state.value(), 0.0);
    }

    #[test]
    fn test_listener_sees_initial_edges() {
        let table = square();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _state = TourState::new(&table, MoveStrategy::BothRandom)
            .unwrap()
            .with_listener(move |e: EdgeEvent| sink.borrow_mut().push(e));

        let events = events.borrow();
        assert_eq!(
            events.as_slice(),
            &[
                EdgeEvent::added(0, 1),
                EdgeEvent::added(1, 2),
                EdgeEvent::added(2, 3),
                EdgeEvent::added(3, 0),
            ]
        );
    }

    #[test]
    fn test_listener_sees_removals_then_additions() {
        let table = scattered(6);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut state = TourState::new(&table, MoveStrategy::BothRandom)
            .unwrap()
            .with_listener(move |e: EdgeEvent| sink.borrow_mut().push(e));
        events.borrow_mut().clear();

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let before = state.tour().to_vec();
        state.propose_move(&mut rng);
        let PendingMove { start, end, .. } = state.pending().unwrap();
        state.apply_move();
        let after = state.tour().to_vec();

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], EdgeEvent::removed(before[start - 1], before[start]));
        assert_eq!(events[1], EdgeEvent::removed(before[end], before[end + 1]));
        assert_eq!(events[2], EdgeEvent::added(after[start - 1], after[start]));
        assert_eq!(events[3], EdgeEvent::added(after[end], after[end + 1]));
        assert!(events[..2].iter().all(|e| e.kind == ChangeKind::Removed));
    }

    #[test]
    fn test_muted_listener_receives_nothing() {
        let table = scattered(6);
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);
        let mut state = TourState::new(&table, MoveStrategy::BothRandom)
            .unwrap()
            .with_listener(move |_: EdgeEvent| *sink.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 6);

        assert!(state.set_notify(false));
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..20 {
            state.propose_move(&mut rng);
            state.apply_move();
        }
        assert_eq!(*count.borrow(), 6);
    }
}
