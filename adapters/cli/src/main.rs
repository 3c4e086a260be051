#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Planar Route pipeline end to end:
//! point generation, corner-nearest start selection, the non-crossing
//! shortest-route search, and optional SVG output.

mod point_file;

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use planar_route_core::{Bounds, Point, Route, SearchOutcome};
use planar_route_rendering::{RoutePresenter, RouteScene};
use planar_route_rendering_svg::{SvgFilePresenter, SvgRenderer};
use planar_route_system_generation::{corner_nearest_node, PointGeneration};
use planar_route_system_search::{SearchConfig, ShortestRouteSearch};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Finds the shortest non-crossing route through a set of 2D points.
#[derive(Debug, Parser)]
#[command(
    name = "planar-route",
    about = "Finds the shortest non-crossing route through a set of 2D points"
)]
struct Cli {
    /// Number of points to generate when no point file is provided.
    #[arg(long, default_value_t = 10)]
    nodes: usize,

    /// Seed for reproducible point generation; omit for a random set.
    #[arg(long)]
    seed: Option<u64>,

    /// Width of the generation bounds in world units.
    #[arg(long, default_value_t = 10.0)]
    width: f64,

    /// Height of the generation bounds in world units.
    #[arg(long, default_value_t = 10.0)]
    height: f64,

    /// Fraction of each axis kept clear of generated points on every side.
    #[arg(long, default_value_t = 0.1)]
    inset: f64,

    /// JSON file holding an explicit point list instead of generating one.
    #[arg(long)]
    points: Option<PathBuf>,

    /// Wall-clock budget for the search in milliseconds.
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Abandon branches already longer than the best route found so far.
    #[arg(long)]
    prune: bool,

    /// Write the resulting scene to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (points, bounds) = prepare_points(&cli)?;

    let outcome = match corner_nearest_node(&points, bounds) {
        Some(start) => {
            let config = SearchConfig {
                deadline: cli.deadline_ms.map(Duration::from_millis),
                prune_above_best: cli.prune,
            };
            ShortestRouteSearch::new().search(&points, start, &config)?
        }
        None => SearchOutcome::Solved {
            route: Route::default(),
            length: 0.0,
        },
    };

    report(&points, &outcome);

    if let Some(path) = cli.svg {
        let scene = RouteScene::compose(&points, bounds, &outcome)?;
        let mut presenter = SvgFilePresenter::new(SvgRenderer::new(), path);
        presenter.present(&scene)?;
    }

    Ok(())
}

fn prepare_points(cli: &Cli) -> anyhow::Result<(Vec<Point>, Bounds)> {
    match cli.points.as_ref() {
        Some(path) => {
            let points = point_file::load_points(path)
                .with_context(|| format!("failed to load points from {}", path.display()))?;
            let bounds = Bounds::enclosing(&points)
                .unwrap_or_else(|| Bounds::from_extent(cli.width, cli.height));
            Ok((points, bounds))
        }
        None => {
            let bounds = Bounds::from_extent(cli.width, cli.height);
            let mut rng = match cli.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let generator = PointGeneration::with_edge_inset(cli.inset);
            Ok((generator.generate(cli.nodes, bounds, &mut rng), bounds))
        }
    }
}

fn report(points: &[Point], outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Solved { route, .. } if route.is_empty() => {
            println!("no points to visit");
        }
        SearchOutcome::Solved { route, length } => {
            let order = route
                .nodes()
                .iter()
                .map(|node| node.get().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("route: {order}");
            println!("length: {length:.3}");
            for node in route.nodes() {
                if let Some(point) = points.get(node.index()) {
                    println!("  {}: ({:.3}, {:.3})", node.get(), point.x(), point.y());
                }
            }
        }
        SearchOutcome::NoSolution => {
            println!("no non-crossing route exists for this configuration");
        }
        SearchOutcome::DeadlineExpired => {
            println!("search deadline expired before completion");
        }
    }
}
