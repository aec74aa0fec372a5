use crate::graph::{Graph, GraphNode, NodeId};
use crate::Vec2;

/// Point-in-region test used to resolve query points to cells.
///
/// The navmesh does not depend on a particular test; callers can supply their own (for example
/// one that accounts for agent radius).
pub trait Containment {
    fn contains(&self, point: Vec2, node: &GraphNode) -> bool;
}

impl<F> Containment for F
where
    F: Fn(Vec2, &GraphNode) -> bool,
{
    fn contains(&self, point: Vec2, node: &GraphNode) -> bool {
        self(point, node)
    }
}

/// Half-plane test against every wall of a counter-clockwise convex cell.
///
/// Points on a wall (within `tolerance`) count as inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexContainment {
    pub tolerance: f32,
}

impl Default for ConvexContainment {
    fn default() -> Self {
        Self {
            tolerance: crate::BuildConfig::DEFAULT_TOLERANCE,
        }
    }
}

impl Containment for ConvexContainment {
    fn contains(&self, point: Vec2, node: &GraphNode) -> bool {
        if node.walls().is_empty() {
            return false;
        }
        node.walls().iter().all(|w| {
            let dir = w.direction();
            let len = dir.length();
            if len <= f32::EPSILON {
                return true;
            }
            dir.cross(point - w.start) / len >= -self.tolerance
        })
    }
}

impl Graph {
    /// First cell, in id order, that contains `point`.
    pub fn locate(&self, point: Vec2, containment: &impl Containment) -> Option<NodeId> {
        self.nodes()
            .iter()
            .find(|n| containment.contains(point, n))
            .map(GraphNode::id)
    }
}
