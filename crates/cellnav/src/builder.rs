//! Navmesh construction: convex decomposition of a boundary plus adjacency inference.

use std::collections::VecDeque;

use crate::error::BuildError;
use crate::graph::{Graph, GraphNode, NodeId};
use crate::polygon::{self, next_index, prev_index, vertex};
use crate::{BuildConfig, Wall};

/// Summary of one build, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub cells: usize,
    pub splits: usize,
    /// Cells emitted without a valid split; these may be non-convex.
    pub fallback_cells: usize,
    /// Number of shared walls (each contributes two neighbor links).
    pub doorways: usize,
    /// The input wound clockwise and was reversed before decomposition.
    pub reversed_winding: bool,
}

#[derive(Debug, Clone)]
pub struct NavMeshBuild {
    pub graph: Graph,
    pub report: BuildReport,
}

#[derive(Debug, Clone, Default)]
pub struct NavMeshBuilder {
    config: BuildConfig,
}

impl NavMeshBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Decompose a closed, simple boundary into convex cells and link the cells that share walls.
    pub fn build(&self, boundary: &[Wall]) -> Result<NavMeshBuild, BuildError> {
        let (outline, reversed_winding) = self.normalize(boundary)?;
        if reversed_winding {
            tracing::debug!(walls = outline.len(), "boundary wound clockwise; reversed");
        }

        let Decomposition { cells, splits } = decompose(outline, &self.config);
        let fallback_cells = cells.iter().filter(|(_, fallback)| *fallback).count();
        let (graph, doorways) = assemble(cells, self.config.tolerance);

        let report = BuildReport {
            cells: graph.len(),
            splits,
            fallback_cells,
            doorways,
            reversed_winding,
        };
        tracing::debug!(
            cells = report.cells,
            splits = report.splits,
            fallback_cells = report.fallback_cells,
            doorways = report.doorways,
            "navmesh built"
        );

        Ok(NavMeshBuild { graph, report })
    }

    fn normalize(&self, boundary: &[Wall]) -> Result<(Vec<Wall>, bool), BuildError> {
        let n = boundary.len();
        if n < 3 {
            return Err(BuildError::TooFewWalls(n));
        }

        let tol = self.config.tolerance;
        for (index, wall) in boundary.iter().enumerate() {
            if wall.length() <= tol {
                return Err(BuildError::DegenerateWall { index });
            }
            let next = next_index(n, index);
            if !wall.end.approx_eq(boundary[next].start, tol) {
                return Err(BuildError::OpenLoop { index, next });
            }
        }

        let area = polygon::signed_area(boundary);
        if area.abs() <= tol * tol {
            return Err(BuildError::ZeroArea);
        }

        if area < 0.0 {
            let reversed = boundary.iter().rev().map(Wall::reversed).collect();
            Ok((reversed, true))
        } else {
            Ok((boundary.to_vec(), false))
        }
    }
}

/// Build a navmesh with the default configuration.
pub fn build_nav_mesh(boundary: &[Wall]) -> Result<Graph, BuildError> {
    NavMeshBuilder::default()
        .build(boundary)
        .map(|build| build.graph)
}

struct Decomposition {
    cells: Vec<(Vec<Wall>, bool)>,
    splits: usize,
}

fn decompose(outline: Vec<Wall>, config: &BuildConfig) -> Decomposition {
    let mut cells = Vec::new();
    let mut splits = 0;
    let mut queue = VecDeque::from([outline]);

    while let Some(current) = queue.pop_front() {
        let Some(reflex) = polygon::first_reflex_vertex(&current, config.tolerance) else {
            cells.push((current, false));
            continue;
        };

        let Some(partner) = find_split(&current, reflex, config) else {
            tracing::warn!(
                reflex,
                vertices = current.len(),
                "no valid split for reflex vertex; emitting cell unsplit"
            );
            cells.push((current, true));
            continue;
        };

        let (first, second) = split_polygon(&current, reflex, partner);
        splits += 1;
        queue.push_back(first);
        queue.push_back(second);
    }

    Decomposition { cells, splits }
}

/// Pick the visible vertex whose diagonal from `reflex` is closest to perpendicular to the
/// edge leaving `reflex`.
fn find_split(walls: &[Wall], reflex: usize, config: &BuildConfig) -> Option<usize> {
    let n = walls.len();
    let r = vertex(walls, reflex);
    let along = vertex(walls, next_index(n, reflex)) - r;

    let candidates: Vec<(usize, f32)> = (0..n)
        .filter(|&i| i != reflex && i != prev_index(n, reflex) && i != next_index(n, reflex))
        .filter(|&i| is_diagonal(walls, reflex, i, config.tolerance))
        .map(|i| (i, ((vertex(walls, i) - r).angle_deg(along) - 90.0).abs()))
        .collect();

    first_within_tie(&candidates, config.angle_tie_deg)
}

/// First candidate, in order, whose score is within `tie` of the lowest score.
fn first_within_tie(candidates: &[(usize, f32)], tie: f32) -> Option<usize> {
    let lowest = candidates
        .iter()
        .map(|&(_, score)| score)
        .min_by(f32::total_cmp)?;
    candidates
        .iter()
        .find(|&&(_, score)| score <= lowest + tie)
        .map(|&(i, _)| i)
}

/// Whether the segment between vertices `i` and `j` runs through the interior of the loop.
fn is_diagonal(walls: &[Wall], i: usize, j: usize, tolerance: f32) -> bool {
    let a = vertex(walls, i);
    let b = vertex(walls, j);
    if a.approx_eq(b, tolerance) {
        return false;
    }
    if !polygon::in_cone(walls, i, b) || !polygon::in_cone(walls, j, a) {
        return false;
    }
    if walls
        .iter()
        .any(|w| polygon::segments_cross(a, b, w.start, w.end, tolerance))
    {
        return false;
    }
    !(0..walls.len())
        .filter(|&k| k != i && k != j)
        .any(|k| polygon::point_on_open_segment(vertex(walls, k), a, b, tolerance))
}

/// Cut the loop along the diagonal `i -> j`. Each half keeps its original walls, in order, and
/// gains the diagonal as its closing wall.
fn split_polygon(walls: &[Wall], i: usize, j: usize) -> (Vec<Wall>, Vec<Wall>) {
    let n = walls.len();
    let a = vertex(walls, i);
    let b = vertex(walls, j);

    let mut first = Vec::new();
    let mut curr = i;
    while curr != j {
        first.push(walls[curr]);
        curr = next_index(n, curr);
    }
    first.push(Wall::new(b, a));

    let mut second = Vec::new();
    let mut curr = j;
    while curr != i {
        second.push(walls[curr]);
        curr = next_index(n, curr);
    }
    second.push(Wall::new(a, b));

    (first, second)
}

/// Instantiate one node per cell and add reciprocal links for every shared wall.
///
/// Returns the graph and the number of shared walls found.
pub(crate) fn assemble(cells: Vec<(Vec<Wall>, bool)>, tolerance: f32) -> (Graph, usize) {
    let mut nodes: Vec<GraphNode> = cells
        .into_iter()
        .enumerate()
        .map(|(i, (walls, fallback))| GraphNode::new(NodeId(i as u32), walls, fallback))
        .collect();

    let mut shared = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            for (wi, a) in nodes[i].walls().iter().enumerate() {
                for (wj, b) in nodes[j].walls().iter().enumerate() {
                    if a.same(b, tolerance) {
                        shared.push((i, wi, j, wj));
                    }
                }
            }
        }
    }

    for &(i, wi, j, wj) in &shared {
        nodes[i].add_neighbor(NodeId(j as u32), wi);
        nodes[j].add_neighbor(NodeId(i as u32), wj);
    }

    (Graph::from_nodes(nodes, tolerance), shared.len())
}
