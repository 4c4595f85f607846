//! Nodes and edge-change notifications.

use std::sync::mpsc::Sender;

/// Identity of a node: its index in the node list a [`WeightTable`] was
/// built from.
///
/// [`WeightTable`]: super::WeightTable
pub type NodeId = usize;

/// A city with integer coordinates.
///
/// The engine only reads the coordinates; identity is positional
/// (see [`NodeId`]), so two nodes may share the same location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = (self.x as f64) - (other.x as f64);
        let dy = (self.y as f64) - (other.y as f64);
        dx.hypot(dy)
    }

    /// Diagonal of the axis-aligned bounding box around `nodes`.
    ///
    /// No edge between two of these nodes can be longer, which makes it a
    /// convenient `max_distance` for [`TemperatureSchedule::linear`] when the
    /// size of the working area is unknown. Returns `0.0` for fewer than two
    /// nodes.
    ///
    /// [`TemperatureSchedule::linear`]: crate::schedule::TemperatureSchedule::linear
    pub fn bounding_diagonal(nodes: &[Node]) -> f64 {
        let mut iter = nodes.iter();
        let Some(first) = iter.next() else {
            return 0.0;
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for node in iter {
            min_x = min_x.min(node.x);
            max_x = max_x.max(node.x);
            min_y = min_y.min(node.y);
            max_y = max_y.max(node.y);
        }
        Node::new(min_x, min_y).distance(&Node::new(max_x, max_y))
    }
}

/// Whether an edge entered or left the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeKind {
    Added,
    Removed,
}

/// A single edge change emitted by a [`TourState`](super::TourState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeEvent {
    pub kind: ChangeKind,
    pub a: NodeId,
    pub b: NodeId,
}

impl EdgeEvent {
    pub fn added(a: NodeId, b: NodeId) -> Self {
        Self {
            kind: ChangeKind::Added,
            a,
            b,
        }
    }

    pub fn removed(a: NodeId, b: NodeId) -> Self {
        Self {
            kind: ChangeKind::Removed,
            a,
            b,
        }
    }
}

/// Sink for edge-change events.
///
/// Notifications are fire-and-forget: a listener has no way to report
/// failure back to the tour, and the tour never waits on it.
///
/// Any `FnMut(EdgeEvent)` closure is a listener. Use [`ChannelListener`] to
/// forward events to another thread.
pub trait EdgeListener {
    fn on_edge(&mut self, event: EdgeEvent);
}

impl<F> EdgeListener for F
where
    F: FnMut(EdgeEvent),
{
    fn on_edge(&mut self, event: EdgeEvent) {
        self(event)
    }
}

/// Forwards every event into an `mpsc` channel.
///
/// Send errors (receiver dropped) are ignored.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<EdgeEvent>,
}

impl ChannelListener {
    pub fn new(sender: Sender<EdgeEvent>) -> Self {
        Self { sender }
    }
}

impl EdgeListener for ChannelListener {
    fn on_edge(&mut self, event: EdgeEvent) {
        let _ = self.sender.send(event);
    }
}
