use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use onionmesh::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod latex;

#[derive(Parser)]
#[command(name = "onionmesh")]
#[command(about = "Onion-peel triangulation runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a point set and render it as a TikZ picture
    Triangulate {
        /// JSON file with points as [[x, y], ...]
        #[arg(long, conflicts_with = "random")]
        input: Option<PathBuf>,
        /// Draw this many random points instead of reading a file
        #[arg(long)]
        random: Option<usize>,
        /// Seed for --random
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Strip walk between adjacent layers
        #[arg(long, value_enum, default_value_t = WalkArg::MaxMinAngle)]
        walk: WalkArg,
        /// Output .tex path
        #[arg(long)]
        out: PathBuf,
        /// Optional JSON summary path
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Write a random point cloud as JSON
    Sample {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half-extent of the sampling square
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WalkArg {
    Greedy,
    MaxMinAngle,
}

impl From<WalkArg> for Strategy {
    fn from(arg: WalkArg) -> Self {
        match arg {
            WalkArg::Greedy => Strategy::Greedy,
            WalkArg::MaxMinAngle => Strategy::MaxMinAngle,
        }
    }
}

#[derive(Serialize)]
struct Summary {
    points: usize,
    layers: usize,
    layer_sizes: Vec<usize>,
    edges: usize,
    construct_time_ms: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, random, seed, walk, out, summary } => {
            triangulate(input, random, seed, walk, &out, summary.as_deref())
        }
        Action::Sample { count, seed, extent, out } => sample(count, seed, extent, &out),
    }
}

fn triangulate(
    input: Option<PathBuf>,
    random: Option<usize>,
    seed: u64,
    walk: WalkArg,
    out: &Path,
    summary: Option<&Path>,
) -> Result<()> {
    let points = match (input, random) {
        (Some(path), None) => load_points(&path)?,
        (None, Some(count)) => draw_point_cloud(
            CloudCfg { count, half_extent: 10.0 },
            ReplayToken { seed, index: 0 },
        ),
        _ => bail!("pass exactly one of --input or --random"),
    };

    let start = Instant::now();
    let tri = OnionTriangulation::with_strategy(&points, walk.into());
    let construct_time_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        points = points.len(),
        layers = tri.layers.len(),
        edges = tri.edges.len(),
        construct_time_ms,
        "triangulated"
    );

    latex::save_latex(out, &points, &tri)?;
    tracing::info!(out = %out.display(), "tikz_written");

    if let Some(summary_path) = summary {
        let report = Summary {
            points: points.len(),
            layers: tri.layers.len(),
            layer_sizes: tri.layers.iter().map(Vec::len).collect(),
            edges: tri.edges.len(),
            construct_time_ms,
        };
        write_with_parents(summary_path, &serde_json::to_vec_pretty(&report)?)?;
        tracing::info!(summary = %summary_path.display(), "summary_written");
    }
    Ok(())
}

fn sample(count: usize, seed: u64, extent: f64, out: &Path) -> Result<()> {
    let points = draw_point_cloud(
        CloudCfg { count, half_extent: extent },
        ReplayToken { seed, index: 0 },
    );
    let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    write_with_parents(out, &serde_json::to_vec_pretty(&coords)?)?;
    tracing::info!(count, seed, out = %out.display(), "cloud_written");
    Ok(())
}

fn load_points(path: &Path) -> Result<Vec<Vec2>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let coords: Vec<[f64; 2]> =
        serde_json::from_str(&raw).context("points must be a JSON array of [x, y] pairs")?;
    Ok(coords.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn write_with_parents(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
