//! Timing probe for a single small point set.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for how long the full
//!   construction (peel + anchors + strips + closing fan) takes on a small
//!   hand-picked input, without pulling in the bench harness.

use std::time::Instant;

use onionmesh::{OnionTriangulation, Vec2};

fn sample_points() -> Vec<Vec2> {
    [
        (0.0, 0.0),
        (0.0, 25.0),
        (10.0, 0.0),
        (15.0, 10.0),
        (6.0, 6.0),
        (5.0, 10.0),
        (7.0, 12.0),
        (10.0, 30.0),
    ]
    .into_iter()
    .map(|(x, y)| Vec2::new(x, y))
    .collect()
}

fn main() {
    let points = sample_points();
    let start = Instant::now();
    let tri = OnionTriangulation::new(&points);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "points={} layers={} edges={}",
        points.len(),
        tri.layers.len(),
        tri.edges.len()
    );
    for (ring, anchor) in tri.layers.iter().zip(&tri.anchors) {
        println!("layer size={} anchor_pos={anchor} ring={ring:?}", ring.len());
    }
    println!("construct_time_ms={elapsed_ms:.3}");
}
