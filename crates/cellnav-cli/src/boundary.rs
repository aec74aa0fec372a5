//! Boundary file format.
//!
//! Either a vertex ring, closed implicitly:
//!
//! ```json
//! { "points": [[0, 0], [2, 0], [2, 1], [1, 1], [1, 2], [0, 2]] }
//! ```
//!
//! or an explicit wall list:
//!
//! ```json
//! { "walls": [{ "start": { "x": 0, "y": 0 }, "end": { "x": 2, "y": 0 } }, ...] }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use cellnav::{walls_from_points, Vec2, Wall};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoundaryFile {
    Points { points: Vec<[f32; 2]> },
    Walls { walls: Vec<Wall> },
}

pub fn parse(content: &str) -> Result<Vec<Wall>> {
    let file: BoundaryFile =
        serde_json::from_str(content).context("expected `points` or `walls` boundary JSON")?;
    Ok(match file {
        BoundaryFile::Points { points } => {
            let points: Vec<Vec2> = points.into_iter().map(Vec2::from).collect();
            walls_from_points(&points)
        }
        BoundaryFile::Walls { walls } => walls,
    })
}

pub fn load(path: &Path) -> Result<Vec<Wall>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read boundary from {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse boundary from {}", path.display()))
}
