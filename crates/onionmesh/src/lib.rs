//! Onion-peel decomposition and strip triangulation for 2D point sets.
//!
//! Purpose
//! - Peel a point set into nested convex layers (successive convex hulls),
//!   then triangulate the annular strip between each pair of adjacent layers
//!   with an advancing front that maximizes the minimum triangle angle.
//! - The result is a planar triangulation (edge list over point indices)
//!   covering the convex hull of the input.
//!
//! Scope
//! - Single-threaded, built once from a fixed point slice, immutable after.
//! - No Delaunay guarantee: the angle criterion is a local heuristic applied
//!   between adjacent layers only.
//! - Duplicate points are not supported; the sampler in [`sample`] rejects
//!   near-coincident draws for exactly that reason.

pub mod geom;
pub mod onion;
pub mod peel;
pub mod sample;
pub mod strip;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::Vec2;
pub use onion::OnionTriangulation;
pub use strip::Strategy;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{cross, is_ccw, side, tri_min_angle, xy_cmp, yx_cmp, Vec2, POINT_EPS};
    pub use crate::onion::OnionTriangulation;
    pub use crate::peel::{lowest_position, peel};
    pub use crate::sample::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::strip::Strategy;
}
