use crate::error::GraphError;
use crate::{polygon, Vec2, Wall};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable handle of a cell within one [`Graph`]; equal to its index in [`Graph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Link from one cell to an adjacent one.
///
/// `wall_index` indexes the walls of the node that *owns* this link, so the doorway midpoint
/// can be recovered from whichever side the edge is traversed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphNeighbor {
    pub node: NodeId,
    pub wall_index: usize,
}

/// One convex cell of the navmesh.
#[derive(Debug, Clone)]
pub struct GraphNode {
    id: NodeId,
    walls: Vec<Wall>,
    center: Vec2,
    neighbors: Vec<GraphNeighbor>,
    fallback: bool,
}

impl GraphNode {
    pub(crate) fn new(id: NodeId, walls: Vec<Wall>, fallback: bool) -> Self {
        let center = polygon::vertex_center(&walls);
        Self {
            id,
            walls,
            center,
            neighbors: Vec::new(),
            fallback,
        }
    }

    pub(crate) fn add_neighbor(&mut self, node: NodeId, wall_index: usize) {
        self.neighbors.push(GraphNeighbor { node, wall_index });
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn neighbors(&self) -> &[GraphNeighbor] {
        &self.neighbors
    }

    /// True when the decomposition could not split this cell and it may be non-convex.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn area(&self) -> f32 {
        polygon::area(&self.walls)
    }

    /// The wall a link from this node passes through.
    pub fn wall_of(&self, link: &GraphNeighbor) -> Option<&Wall> {
        self.walls.get(link.wall_index)
    }
}

/// Navigation graph produced by one decomposition run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    tolerance: f32,
}

impl Graph {
    pub(crate) fn from_nodes(nodes: Vec<GraphNode>, tolerance: f32) -> Self {
        Self { nodes, tolerance }
    }

    /// Assemble a graph from cells that are already convex (counter-clockwise wall loops).
    ///
    /// No decomposition happens; adjacency is inferred from shared walls.
    pub fn from_cells(cells: Vec<Vec<Wall>>, tolerance: f32) -> Self {
        let cells = cells.into_iter().map(|walls| (walls, false)).collect();
        crate::builder::assemble(cells, tolerance).0
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tolerance the graph was built with.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn neighbors(&self, id: NodeId) -> &[GraphNeighbor] {
        self.node(id).map(GraphNode::neighbors).unwrap_or(&[])
    }

    pub fn fallback_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.fallback).count()
    }

    /// Number of directed neighbor links (twice the number of doorways).
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum()
    }

    pub fn total_area(&self) -> f32 {
        self.nodes.iter().map(GraphNode::area).sum()
    }

    /// Verify that every link has a reciprocal one and both resolve to the same wall.
    pub fn check_adjacency(&self) -> Result<(), GraphError> {
        for node in &self.nodes {
            for link in &node.neighbors {
                let from = node.id;
                let to = link.node;
                let Some(other) = self.node(to) else {
                    return Err(GraphError::DanglingLink { from, to });
                };
                let Some(wall) = node.wall_of(link) else {
                    return Err(GraphError::WallIndexOutOfRange {
                        from,
                        to,
                        wall_index: link.wall_index,
                    });
                };

                let mut reciprocal = false;
                let mut matched = false;
                for back in other.neighbors.iter().filter(|b| b.node == from) {
                    reciprocal = true;
                    if other
                        .wall_of(back)
                        .is_some_and(|w| w.same(wall, self.tolerance))
                    {
                        matched = true;
                        break;
                    }
                }

                if !reciprocal {
                    return Err(GraphError::MissingReciprocal { from, to });
                }
                if !matched {
                    return Err(GraphError::WallMismatch { from, to });
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CellSerde {
    walls: Vec<Wall>,
    #[serde(default)]
    fallback: bool,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GraphSerde {
    tolerance: f32,
    cells: Vec<CellSerde>,
}

#[cfg(feature = "serde")]
impl Serialize for Graph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GraphSerde {
            tolerance: self.tolerance,
            cells: self
                .nodes
                .iter()
                .map(|n| CellSerde {
                    walls: n.walls.clone(),
                    fallback: n.fallback,
                })
                .collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = GraphSerde::deserialize(deserializer)?;
        let cells = data
            .cells
            .into_iter()
            .map(|c| (c.walls, c.fallback))
            .collect();
        Ok(crate::builder::assemble(cells, data.tolerance).0)
    }
}
