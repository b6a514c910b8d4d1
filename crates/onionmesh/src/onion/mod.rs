//! The assembled structure: layers, anchors, and triangulation edges.


use crate::geom::Vec2;
use crate::peel::{lowest_position, peel};
use crate::strip::{close_layer, triangulate_strip, Strategy};

/// Nested convex layers plus the strip triangulation between them.
///
/// Built in one pass from a point slice and immutable afterwards. The
/// structure stores only positions into the caller's slice, never the
/// coordinates themselves, so it is plain data and safe to share between
/// readers once construction returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnionTriangulation {
    /// Convex layers, outer to inner; each a CCW cyclic index ring.
    pub layers: Vec<Vec<usize>>,
    /// Per layer, the position (within that ring) of its lowest point.
    pub anchors: Vec<usize>,
    /// Cross-layer and closing-fan edges as unordered index pairs.
    pub edges: Vec<(usize, usize)>,
}

impl OnionTriangulation {
    /// Build with the default angle-optimizing strip walk.
    pub fn new(points: &[Vec2]) -> Self {
        Self::with_strategy(points, Strategy::default())
    }

    /// Build with an explicit strip strategy.
    ///
    /// Empty input yields empty layers, anchors and edges; a single point
    /// yields one singleton layer, anchor 0 and no edges.
    pub fn with_strategy(points: &[Vec2], strategy: Strategy) -> Self {
        let layers = peel(points);
        let anchors: Vec<usize> = layers
            .iter()
            .map(|ring| lowest_position(ring, points))
            .collect();
        let mut edges = Vec::new();
        for k in 1..layers.len() {
            triangulate_strip(
                points,
                &layers[k - 1],
                &layers[k],
                anchors[k - 1],
                anchors[k],
                strategy,
                &mut edges,
            );
        }
        if let Some(last) = layers.last() {
            close_layer(last, &mut edges);
        }
        Self { layers, anchors, edges }
    }
}
