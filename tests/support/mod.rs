//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use geo::Coord;
use laserface::float_types::Real;

/// Returns `true` if `a` and `b` are within `eps` of each other.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Returns `[min_x, min_y, max_x, max_y]` for a non-empty point set.
pub fn bounding_box(points: &[Coord<Real>]) -> [Real; 4] {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    [min_x, min_y, max_x, max_y]
}

/// True if every point of `expected` has a counterpart in `actual` within `eps`,
/// and both have the same length. Order is ignored.
pub fn same_point_set(actual: &[Coord<Real>], expected: &[Coord<Real>], eps: Real) -> bool {
    actual.len() == expected.len()
        && expected.iter().all(|e| {
            actual
                .iter()
                .any(|a| approx_eq(a.x, e.x, eps) && approx_eq(a.y, e.y, eps))
        })
}
