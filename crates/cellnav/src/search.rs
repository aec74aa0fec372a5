//! A* over cell adjacency, producing doorway-midpoint waypoints.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::containment::Containment;
use crate::error::RouteError;
use crate::graph::{Graph, GraphNeighbor, NodeId};
use crate::Vec2;

/// Output of [`find_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Doorway midpoints from start to destination, followed by the literal target point.
    ///
    /// When `reached` is false this is just `[target]`.
    pub waypoints: Vec<Vec2>,
    pub nodes_expanded: usize,
    pub reached: bool,
}

/// A successful point-to-point route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub start: NodeId,
    pub destination: NodeId,
    pub waypoints: Vec<Vec2>,
    pub nodes_expanded: usize,
}

/// Search record; lives only for the duration of one call.
#[derive(Debug, Clone, Copy)]
struct Entry {
    node: NodeId,
    prev: Option<usize>,
    via: Option<GraphNeighbor>,
    g: f32,
}

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: f32,
    /// Index into the entry arena, which is also insertion order.
    entry: usize,
}

impl OpenNode {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.entry.cmp(&other.entry))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key_cmp(self)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* from `start` to `destination`, steering towards `target` (a point inside `destination`).
///
/// Edge cost is the distance between cell centers and the heuristic is the distance from a cell
/// center to `target`. Equal `f` values are expanded in insertion order. If the destination
/// cannot be reached the result is the single-point path `[target]` with `reached == false`.
pub fn find_path(graph: &Graph, start: NodeId, destination: NodeId, target: Vec2) -> SearchResult {
    let mut entries: Vec<Entry> = Vec::new();
    let mut open = BinaryHeap::new();
    let mut cost_so_far: HashMap<NodeId, f32> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut expanded = 0;

    if let Some(node) = graph.node(start) {
        entries.push(Entry {
            node: start,
            prev: None,
            via: None,
            g: 0.0,
        });
        open.push(OpenNode {
            f: node.center().distance(target),
            entry: 0,
        });
        cost_so_far.insert(start, 0.0);
    }

    while let Some(OpenNode { entry: current, .. }) = open.pop() {
        let Entry { node: id, g, .. } = entries[current];
        if !visited.insert(id) {
            continue;
        }
        expanded += 1;
        tracing::trace!(node = id.0, g, "expanding");

        if id == destination {
            let waypoints = reconstruct(graph, &entries, current, target);
            tracing::trace!(
                ?start,
                ?destination,
                waypoints = waypoints.len(),
                nodes_expanded = expanded,
                "path found"
            );
            return SearchResult {
                waypoints,
                nodes_expanded: expanded,
                reached: true,
            };
        }

        let Some(node) = graph.node(id) else { continue };
        for link in node.neighbors() {
            let Some(next) = graph.node(link.node) else {
                continue;
            };
            let new_cost = g + node.center().distance(next.center());
            let improves = cost_so_far
                .get(&link.node)
                .map_or(true, |&known| new_cost < known);
            if !improves {
                continue;
            }

            cost_so_far.insert(link.node, new_cost);
            entries.push(Entry {
                node: link.node,
                prev: Some(current),
                via: Some(*link),
                g: new_cost,
            });
            open.push(OpenNode {
                f: new_cost + next.center().distance(target),
                entry: entries.len() - 1,
            });
        }
    }

    tracing::warn!(
        ?start,
        ?destination,
        nodes_expanded = expanded,
        "no path found"
    );
    SearchResult {
        waypoints: vec![target],
        nodes_expanded: expanded,
        reached: false,
    }
}

/// Walk predecessors back to the start, taking each doorway from the side being left.
fn reconstruct(graph: &Graph, entries: &[Entry], mut current: usize, target: Vec2) -> Vec<Vec2> {
    let mut path = Vec::new();
    while let Entry {
        prev: Some(prev),
        via: Some(link),
        ..
    } = entries[current]
    {
        let midpoint = graph
            .node(entries[prev].node)
            .and_then(|from| from.wall_of(&link))
            .map(|wall| wall.midpoint());
        if let Some(midpoint) = midpoint {
            path.push(midpoint);
        }
        current = prev;
    }
    path.reverse();
    path.push(target);
    path
}

impl Graph {
    /// Resolve both points to cells and search between them.
    ///
    /// Unlike [`find_path`], failure is reported as an error rather than a single-point path.
    pub fn route(
        &self,
        start: Vec2,
        target: Vec2,
        containment: &impl Containment,
    ) -> Result<Route, RouteError> {
        let start_node = self
            .locate(start, containment)
            .ok_or(RouteError::StartOutsideMesh)?;
        let destination = self
            .locate(target, containment)
            .ok_or(RouteError::DestinationOutsideMesh)?;

        let result = find_path(self, start_node, destination, target);
        if !result.reached {
            return Err(RouteError::Unreachable {
                nodes_expanded: result.nodes_expanded,
            });
        }

        Ok(Route {
            start: start_node,
            destination,
            waypoints: result.waypoints,
            nodes_expanded: result.nodes_expanded,
        })
    }
}
