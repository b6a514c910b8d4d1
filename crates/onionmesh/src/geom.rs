//! Planar primitives: turn predicates, angles, lexicographic orders.
//!
//! Everything here is a pure function over [`Vec2`]. Degenerate inputs are
//! not guarded: the angle of a zero-length leg is NaN and propagates to the
//! caller, which must tie-break deterministically (see `strip`).

use std::cmp::Ordering;

use nalgebra::Vector2;

/// 2D point/vector; add, sub, scale, dot and norm come from nalgebra.
pub type Vec2 = Vector2<f64>;

/// Tolerance for coordinate and collinearity comparisons.
pub const POINT_EPS: f64 = 1.0e-8;

/// Tolerance equality for scalars.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < POINT_EPS
}

/// 2D cross product: signed area of the parallelogram spanned by `a`, `b`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Turn sign at `o`: positive when `o → a → b` turns left.
#[inline]
pub fn side(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    cross(a - o, b - o)
}

/// Non-strict counterclockwise predicate; collinear counts as CCW.
#[inline]
pub fn is_ccw(o: Vec2, a: Vec2, b: Vec2) -> bool {
    side(o, a, b) >= 0.0
}

/// Strict left turn beyond tolerance. Hull scans pop on its negation, so
/// collinear points never survive as hull vertices.
#[inline]
pub fn strictly_ccw(o: Vec2, a: Vec2, b: Vec2) -> bool {
    side(o, a, b) > POINT_EPS
}

/// Are `a`, `b`, `c` collinear within tolerance?
#[inline]
pub fn collinear(a: Vec2, b: Vec2, c: Vec2) -> bool {
    approx_eq(cross(a - b, c - b), 0.0)
}

/// Interior angle at `o` between the legs `o → a` and `o → b`.
///
/// The cosine ratio is clamped to [-1, 1] so rounding never produces a
/// spurious NaN; a genuinely zero-length leg still yields NaN.
#[inline]
pub fn angle_at(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    let d1 = a - o;
    let d2 = b - o;
    (d1.dot(&d2) / (d1.norm() * d2.norm())).clamp(-1.0, 1.0).acos()
}

/// Minimum interior angle of the triangle `a b c`.
#[inline]
pub fn tri_min_angle(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    angle_at(a, b, c).min(angle_at(b, c, a)).min(angle_at(c, a, b))
}

/// Lexicographic order, x primary, y secondary.
#[inline]
pub fn xy_cmp(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Lexicographic order, y primary, x secondary. Its minimum is the origin
/// of the peel and the anchor of each layer.
#[inline]
pub fn yx_cmp(a: &Vec2, b: &Vec2) -> Ordering {
    match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Polar order around `origin`: ascending `atan2`, angular ties (within
/// tolerance) broken by ascending distance from the origin.
#[inline]
pub fn polar_cmp(origin: Vec2, a: Vec2, b: Vec2) -> Ordering {
    let da = a - origin;
    let db = b - origin;
    let ta = da.y.atan2(da.x);
    let tb = db.y.atan2(db.x);
    if approx_eq(ta, tb) {
        da.norm().partial_cmp(&db.norm()).unwrap_or(Ordering::Equal)
    } else {
        ta.partial_cmp(&tb).unwrap_or(Ordering::Equal)
    }
}
