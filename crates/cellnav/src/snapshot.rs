use std::sync::Arc;

use parking_lot::RwLock;

use crate::builder::{BuildReport, NavMeshBuilder};
use crate::error::BuildError;
use crate::{Graph, Wall};

/// Shared, swappable reference to the current navmesh.
///
/// Readers take an `Arc` snapshot and search it without holding the lock. A rebuild constructs
/// the new graph completely before replacing the reference, so searches that already hold a
/// snapshot finish against the old graph.
#[derive(Debug)]
pub struct NavMeshHandle {
    current: RwLock<Arc<Graph>>,
}

impl NavMeshHandle {
    pub fn new(graph: Graph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
        }
    }

    pub fn snapshot(&self) -> Arc<Graph> {
        self.current.read().clone()
    }

    /// Replace the published graph, returning the previous one.
    pub fn publish(&self, graph: Graph) -> Arc<Graph> {
        let next = Arc::new(graph);
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, next)
    }

    /// Build a graph from `boundary` and publish it. On error the current graph stays in place.
    pub fn rebuild(
        &self,
        builder: &NavMeshBuilder,
        boundary: &[Wall],
    ) -> Result<BuildReport, BuildError> {
        let build = builder.build(boundary)?;
        self.publish(build.graph);
        Ok(build.report)
    }
}
