//! Convex-cell navigation meshes built from polygon boundaries, with A* path search.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod containment;
pub mod error;
pub mod graph;
pub mod math;
pub mod polygon;
pub mod search;
pub mod snapshot;
pub mod wall;

pub use builder::{build_nav_mesh, BuildReport, NavMeshBuild, NavMeshBuilder};
pub use config::BuildConfig;
pub use containment::{Containment, ConvexContainment};
pub use error::{BuildError, GraphError, RouteError};
pub use graph::{Graph, GraphNeighbor, GraphNode, NodeId};
pub use math::Vec2;
pub use search::{find_path, Route, SearchResult};
pub use snapshot::NavMeshHandle;
pub use wall::{walls_from_points, Wall};
