//! Route an agent across an ASCII map and print the result.
//!
//! Map legend: `.` floor, `#` wall, `S` start, `G` goal, `E` an entity that
//! blocks its cell. Set `RUST_LOG=trace` to see the search internals.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use gridroute_core::{Coord, Extent, Grid};
use gridroute_paths::{
    DEFAULT_MAX_ITERATIONS, GridProvider, Heuristic, LineOfSight, SearchOptions,
    find_path_in_scene, is_contiguous, next_step, path_cost, smooth_path_with,
};

const DEFAULT_MAP: &str = "\
S.........#.........
.####.....#..####...
....#.....#.....#...
....#..E..#.....#...
....#.....####..#...
....#...........#...
....######..E...#...
...........#....#..G
";

#[derive(Parser, Debug)]
#[command(name = "route", about = "Find a path across an ASCII map")]
struct Args {
    /// Map file; the built-in map is used when omitted.
    map: Option<PathBuf>,

    /// Allow diagonal moves.
    #[arg(long)]
    diagonal: bool,

    /// manhattan, euclidean, chebyshev or octile.
    #[arg(long, default_value = "manhattan")]
    heuristic: String,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    diagonal_cost: f64,

    /// Drop waypoints that are in straight line of sight.
    #[arg(long)]
    smooth: bool,

    /// Use the exact line-of-sight trace when smoothing.
    #[arg(long)]
    exact_los: bool,

    /// Log every step an agent takes along the path.
    #[arg(long)]
    walk: bool,
}

/// Terrain plus the entities standing on it.
struct Scene {
    grid: Grid,
    entities: Vec<Coord>,
}

impl GridProvider for Scene {
    fn extent(&self) -> Extent {
        self.grid.extent()
    }

    fn is_occupied(&self, p: Coord) -> bool {
        self.entities.contains(&p)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let text = match &args.map {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };
    let (grid, markers) = Grid::from_ascii_with_markers(&text, "SGE")?;
    let start = markers.find('S')?;
    let goal = markers.find('G')?;
    let scene = Scene {
        grid,
        entities: markers.all('E').collect(),
    };

    let options = SearchOptions::new()
        .with_diagonal(args.diagonal)
        .with_heuristic(Heuristic::from_name(&args.heuristic))
        .with_max_iterations(args.max_iterations)
        .with_diagonal_cost(args.diagonal_cost);
    options.validate()?;
    info!(
        "routing {start} -> {goal} on {} ({} entities), {:?}",
        scene.extent(),
        scene.entities.len(),
        options
    );

    let terrain = |p: Coord| scene.grid.is_walkable(p);
    let Some(path) = find_path_in_scene(start, goal, &scene, &options, &terrain) else {
        warn!("no path from {start} to {goal}");
        println!("{}", draw(&scene, start, goal, &[]));
        return Ok(());
    };
    info!(
        "found {} cells, cost {:.3}, contiguous: {}",
        path.len(),
        path_cost(&path, options.diagonal_cost),
        is_contiguous(&path, options.allow_diagonal)
    );

    let path = if args.smooth {
        let los = if args.exact_los {
            LineOfSight::Exact
        } else {
            LineOfSight::Sampled
        };
        let free = |p: Coord| terrain(p) && !scene.is_occupied(p);
        let smoothed = smooth_path_with(&path, &free, los);
        info!("smoothed to {} waypoints ({los:?})", smoothed.len());
        smoothed
    } else {
        path
    };

    println!("{}", draw(&scene, start, goal, &path));

    if args.walk {
        let mut at = start;
        while let Some(next) = next_step(&path, at) {
            info!("step {at} -> {next}");
            at = next;
        }
    }
    Ok(())
}

fn draw(scene: &Scene, start: Coord, goal: Coord, path: &[Coord]) -> String {
    scene.grid.render(|p| {
        if p == start {
            Some('S')
        } else if p == goal {
            Some('G')
        } else if scene.is_occupied(p) {
            Some('E')
        } else if path.contains(&p) {
            Some('*')
        } else {
            None
        }
    })
}
