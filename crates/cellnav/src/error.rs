use thiserror::Error;

use crate::NodeId;

/// Why a boundary could not be turned into a navmesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("boundary needs at least 3 walls, got {0}")]
    TooFewWalls(usize),

    #[error("boundary is not closed: wall {index} does not end where wall {next} starts")]
    OpenLoop { index: usize, next: usize },

    #[error("wall {index} has zero length")]
    DegenerateWall { index: usize },

    #[error("boundary encloses no area")]
    ZeroArea,
}

/// Why a point-to-point route query produced no usable path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("start point is not inside any navmesh cell")]
    StartOutsideMesh,

    #[error("destination point is not inside any navmesh cell")]
    DestinationOutsideMesh,

    #[error("destination is unreachable from start ({nodes_expanded} nodes expanded)")]
    Unreachable { nodes_expanded: usize },
}

/// Structural inconsistency found by [`crate::Graph::check_adjacency`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {from:?} links to missing node {to:?}")]
    DanglingLink { from: NodeId, to: NodeId },

    #[error("node {from:?} links to {to:?} through wall {wall_index}, which does not exist")]
    WallIndexOutOfRange {
        from: NodeId,
        to: NodeId,
        wall_index: usize,
    },

    #[error("node {from:?} links to {to:?} but there is no link back")]
    MissingReciprocal { from: NodeId, to: NodeId },

    #[error("nodes {from:?} and {to:?} disagree about their shared wall")]
    WallMismatch { from: NodeId, to: NodeId },
}
