//! cellnav CLI - build and query convex-cell navmeshes.
//!
//! - `cellnav build <BOUNDARY>` - decompose and print the cells
//! - `cellnav path <BOUNDARY> --from X,Y --to X,Y` - run a route query
//! - `cellnav check <BOUNDARY>` - verify adjacency and area coverage

mod boundary;
mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cellnav::{polygon, ConvexContainment, NavMeshBuild, NavMeshBuilder, Vec2, Wall};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "cellnav")]
#[command(about = "Convex-cell navmesh builder and path query tool", version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a boundary and list the resulting cells
    Build {
        /// Boundary JSON file
        boundary: PathBuf,

        /// Print the whole graph as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Find a route between two points
    Path {
        /// Boundary JSON file
        boundary: PathBuf,

        /// Start point as `X,Y`
        #[arg(long, value_parser = parse_point)]
        from: Vec2,

        /// Destination point as `X,Y`
        #[arg(long, value_parser = parse_point)]
        to: Vec2,
    },

    /// Verify adjacency symmetry and that cells cover the boundary
    Check {
        /// Boundary JSON file
        boundary: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { boundary, json } => build(&config, &boundary, json),
        Commands::Path { boundary, from, to } => path(&config, &boundary, from, to),
        Commands::Check { boundary } => check(&config, &boundary),
    }
}

fn parse_point(s: &str) -> std::result::Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x `{x}`: {e}"))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y `{y}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn load_and_build(config: &CliConfig, path: &Path) -> Result<NavMeshBuild> {
    let walls = boundary::load(path)?;
    build_walls(config, path, &walls)
}

fn build_walls(config: &CliConfig, path: &Path, walls: &[Wall]) -> Result<NavMeshBuild> {
    tracing::info!(boundary = %path.display(), walls = walls.len(), "Building navmesh");
    NavMeshBuilder::new(config.build)
        .build(walls)
        .with_context(|| format!("Failed to build navmesh from {}", path.display()))
}

fn build(config: &CliConfig, path: &Path, json: bool) -> Result<()> {
    let NavMeshBuild { graph, report } = load_and_build(config, path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    println!("Cells: {}", report.cells);
    println!("Splits: {}", report.splits);
    println!("Doorways: {}", report.doorways);
    if report.fallback_cells > 0 {
        println!("Unsplit (possibly non-convex) cells: {}", report.fallback_cells);
    }
    println!();
    for node in graph.nodes() {
        let flag = if node.is_fallback() { " [fallback]" } else { "" };
        println!(
            "  cell {} center=({:.3}, {:.3}) area={:.3}{}",
            node.id().0,
            node.center().x,
            node.center().y,
            node.area(),
            flag
        );
        for (i, wall) in node.walls().iter().enumerate() {
            let door = node
                .neighbors()
                .iter()
                .find(|n| n.wall_index == i)
                .map(|n| format!(" -> cell {}", n.node.0))
                .unwrap_or_default();
            println!(
                "    wall {i}: ({:.3}, {:.3}) -> ({:.3}, {:.3}){door}",
                wall.start.x, wall.start.y, wall.end.x, wall.end.y
            );
        }
    }

    Ok(())
}

fn path(config: &CliConfig, boundary: &Path, from: Vec2, to: Vec2) -> Result<()> {
    let NavMeshBuild { graph, .. } = load_and_build(config, boundary)?;
    let containment = ConvexContainment {
        tolerance: config.containment_tolerance(),
    };

    let route = graph
        .route(from, to, &containment)
        .context("No route between the requested points")?;
    tracing::info!(
        start = route.start.0,
        destination = route.destination.0,
        nodes_expanded = route.nodes_expanded,
        "Route found"
    );

    println!(
        "Route: {} waypoints, {} nodes expanded",
        route.waypoints.len(),
        route.nodes_expanded
    );
    for p in &route.waypoints {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }

    Ok(())
}

fn check(config: &CliConfig, path: &Path) -> Result<()> {
    let walls = boundary::load(path)?;
    let NavMeshBuild { graph, report } = build_walls(config, path, &walls)?;

    graph
        .check_adjacency()
        .context("Navmesh adjacency is inconsistent")?;

    let expected = polygon::area(&walls);
    let covered = graph.total_area();
    println!("Cells: {} ({} unsplit)", report.cells, report.fallback_cells);
    println!("Boundary area: {expected:.4}");
    println!("Covered area:  {covered:.4}");

    let slack = config.build.tolerance.max(1e-6) * expected.max(1.0);
    if (expected - covered).abs() > slack {
        bail!("cells cover {covered:.4} but the boundary encloses {expected:.4}");
    }
    println!("OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_with_surrounding_spaces() {
        assert_eq!(parse_point("1.5,-2"), Ok(Vec2::new(1.5, -2.0)));
        assert_eq!(parse_point(" 3 , 4 "), Ok(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn check_accepts_an_l_shaped_boundary_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "points": [[0, 0], [2, 0], [2, 1], [1, 1], [1, 2], [0, 2]] }}"#
        )
        .expect("write");

        let config = CliConfig::load_or_default(None).expect("config");
        check(&config, file.path()).expect("cells should cover the boundary");
    }

    #[test]
    fn rejects_malformed_points() {
        let err = parse_point("1.5").unwrap_err();
        assert!(err.contains("expected `X,Y`"), "{err}");

        let err = parse_point("a,2").unwrap_err();
        assert!(err.starts_with("invalid x `a`"), "{err}");

        let err = parse_point("1,").unwrap_err();
        assert!(err.starts_with("invalid y ``"), "{err}");

        assert!(parse_point("1,2,3").is_err());
    }
}
