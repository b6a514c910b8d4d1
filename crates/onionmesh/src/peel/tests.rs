use super::*;
use crate::geom::{side, Vec2};
use crate::sample::{draw_point_cloud, CloudCfg, ReplayToken};

fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

fn assert_partition(layers: &[Vec<usize>], n: usize) {
    let mut seen: Vec<usize> = layers.concat();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

fn assert_weakly_convex(ring: &[usize], points: &[Vec2]) {
    if ring.len() < 3 {
        return;
    }
    let k = ring.len();
    for i in 0..k {
        let s = side(
            points[ring[i]],
            points[ring[(i + 1) % k]],
            points[ring[(i + 2) % k]],
        );
        assert!(s >= -1e-7, "reflex turn {s} at ring position {i}");
    }
}

#[test]
fn empty_and_singleton() {
    assert!(peel(&[]).is_empty());
    let layers = peel(&pts(&[(0.0, 0.0)]));
    assert_eq!(layers, vec![vec![0]]);
}

#[test]
fn two_points_form_one_layer() {
    let layers = peel(&pts(&[(3.0, 1.0), (0.0, 0.0)]));
    assert_eq!(layers.len(), 1);
    assert_partition(&layers, 2);
    // The origin (lowest point) leads the ring.
    assert_eq!(layers[0][0], 1);
}

#[test]
fn triangle_is_a_single_ccw_layer() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let layers = peel(&points);
    assert_eq!(layers, vec![vec![0, 1, 2]]);
    assert_weakly_convex(&layers[0], &points);
}

#[test]
fn square_with_interior_point_peels_into_two_layers() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)]);
    let layers = peel(&points);
    assert_eq!(layers, vec![vec![0, 1, 2, 3], vec![4]]);
    assert_eq!(lowest_position(&layers[0], &points), 0);
}

#[test]
fn collinear_midpoint_is_not_a_hull_vertex() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let layers = peel(&points);
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0], vec![0, 2]);
    assert_eq!(layers[1], vec![1]);
}

#[test]
fn four_point_inner_candidate_set_comes_out_ccw() {
    // Square shell around a triangle: the second scan sees the origin seed
    // plus exactly three candidates and resolves order by orientation test.
    let points = pts(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (4.0, 4.0),
        (6.0, 4.0),
        (5.0, 6.0),
    ]);
    let layers = peel(&points);
    assert_eq!(layers.len(), 2);
    assert_partition(&layers, 7);
    let inner = &layers[1];
    assert_eq!(inner.len(), 3);
    let s = side(points[inner[0]], points[inner[1]], points[inner[2]]);
    assert!(s > 0.0, "inner triangle must be CCW, got side {s}");
}

#[test]
fn deep_onion_partitions_and_stays_convex() {
    // Three nested squares plus a center point: four layers.
    let mut raw = Vec::new();
    for &r in &[9.0, 6.0, 3.0] {
        raw.extend([(-r, -r), (r, -r), (r, r), (-r, r)]);
    }
    raw.push((0.0, 0.5));
    let points = pts(&raw);
    let layers = peel(&points);
    assert_eq!(layers.len(), 4);
    assert_partition(&layers, points.len());
    for ring in &layers {
        assert_weakly_convex(ring, &points);
    }
    assert_eq!(layers[3], vec![12]);
}

#[test]
fn sampled_cloud_partitions_into_convex_layers() {
    let points = draw_point_cloud(
        CloudCfg { count: 120, half_extent: 25.0 },
        ReplayToken { seed: 7, index: 0 },
    );
    let layers = peel(&points);
    assert_partition(&layers, points.len());
    for ring in &layers {
        assert!(!ring.is_empty());
        assert_weakly_convex(ring, &points);
    }
}

#[test]
fn inner_scan_recovers_seed_side_vertices() {
    // M = (3, 1) is inside the hull *with* the seed but a vertex of the hull
    // without it; the backward sweep must re-admit it.
    let points = pts(&[(0.0, 0.0), (6.0, 1.0), (3.0, 1.0), (5.0, 5.0), (1.0, 4.0)]);
    let order = vec![0, 1, 2, 3, 4]; // already in angular order around (0, 0)
    let (layer, remainder) = inner_scan(&order, &points);
    assert_eq!(layer, vec![1, 3, 4, 2]);
    assert_eq!(remainder, vec![0]);
}

#[test]
fn inner_scan_drops_interior_point_for_good() {
    // Same shape but M = (4, 2.5) is interior either way: the forced
    // re-examination of the low end must scrub it back out.
    let points = pts(&[(0.0, 0.0), (6.0, 1.0), (4.0, 2.5), (5.0, 5.0), (1.0, 4.0)]);
    let order = vec![0, 1, 2, 3, 4];
    let (layer, remainder) = inner_scan(&order, &points);
    assert_eq!(layer, vec![1, 3, 4]);
    assert_eq!(remainder, vec![0, 2]);
}
