//! Convex hull and minimal-area bounding box rotation.
//!
//! For every edge of the convex hull the whole point set is rotated so that
//! edge lies along the X axis, and the axis-aligned bounding box is measured.
//! The rotation giving the smallest box wins. The optimal enclosing rectangle of
//! a convex region always shares a side with one of its hull edges, so checking
//! hull edges is enough.

use crate::float_types::{PI, Real, tolerance};
use geo::{ConvexHull, Coord, MultiPoint, Point, Rect};
use serde::{Deserialize, Serialize};

/// The chosen rotation and the point set it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    pub points: Vec<Coord<Real>>,
    /// Counter-clockwise rotation about the origin, in degrees.
    pub degrees: Real,
    /// Area of the axis-aligned bounding box of `points`.
    pub area: Real,
}

/// Axis-aligned bounds of a point set, or `None` when it is empty.
pub fn bounds(points: &[Coord<Real>]) -> Option<Rect<Real>> {
    let (first, rest) = points.split_first()?;
    let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
        (
            Coord { x: min.x.min(p.x), y: min.y.min(p.y) },
            Coord { x: max.x.max(p.x), y: max.y.max(p.y) },
        )
    });
    Some(Rect::new(min, max))
}

/// `|width * height|` of the bounding box; zero for an empty set.
pub fn bounding_area(points: &[Coord<Real>]) -> Real {
    bounds(points).map_or(0.0, |rect| (rect.width() * rect.height()).abs())
}

/// Convex hull vertices in counter-clockwise order, without the closing vertex.
///
/// Collinear points are left out unless they are hull corners. Fewer than three
/// points are returned unchanged.
pub fn convex_hull(points: &[Coord<Real>]) -> Vec<Coord<Real>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let hull = MultiPoint::new(points.iter().copied().map(Point::from).collect()).convex_hull();
    let mut ring: Vec<Coord<Real>> = hull.exterior().0.clone();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Angle of the segment `a -> b` relative to the horizontal axis, in degrees (-180, 180].
pub fn line_angle(a: Coord<Real>, b: Coord<Real>) -> Real {
    (b.y - a.y).atan2(b.x - a.x) * 180.0 / PI
}

/// Rotate a point counter-clockwise about the origin by `radians`.
#[inline]
pub fn rotate_point(point: Coord<Real>, radians: Real) -> Coord<Real> {
    let (sin, cos) = radians.sin_cos();
    Coord {
        x: point.x * cos - point.y * sin,
        y: point.x * sin + point.y * cos,
    }
}

/// Rotate a set of points counter-clockwise about the origin by `degrees`.
pub fn rotate_polygon_degrees(points: &[Coord<Real>], degrees: Real) -> Vec<Coord<Real>> {
    let radians = degrees / 180.0 * PI;
    points.iter().map(|p| rotate_point(*p, radians)).collect()
}

/// Rotate `points` about the origin so their axis-aligned bounding box has the
/// smallest area.
///
/// Candidates are `360 - angle` for each hull edge, in hull order, reported in
/// `[0, 360)`. A later candidate only wins with an area smaller by more than
/// [`tolerance`], so among equal boxes the earliest hull edge is kept. Fewer than
/// three points pass through unrotated.
pub fn rotate_points_to_smallest_box(points: &[Coord<Real>]) -> RotationResult {
    if points.len() < 3 {
        return RotationResult {
            points: points.to_vec(),
            degrees: 0.0,
            area: bounding_area(points),
        };
    }

    let hull = convex_hull(points);
    let mut best = RotationResult {
        points: points.to_vec(),
        degrees: 0.0,
        area: Real::INFINITY,
    };

    for (i, a) in hull.iter().enumerate() {
        let b = hull[(i + 1) % hull.len()];
        let degrees = (360.0 - line_angle(*a, b)).rem_euclid(360.0);
        let rotated = rotate_polygon_degrees(points, degrees);
        let area = bounding_area(&rotated);
        if area + tolerance() < best.area {
            best = RotationResult {
                points: rotated,
                degrees,
                area,
            };
        }
    }

    // every point identical or otherwise no usable edge
    if !best.area.is_finite() {
        best.area = bounding_area(points);
    }
    best
}

/// Length of every edge of a closed loop, starting with `loop[0] -> loop[1]`.
pub fn edge_lengths(points: &[Coord<Real>]) -> Vec<Real> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            (b.x - a.x).hypot(b.y - a.y)
        })
        .collect()
}

/// Interior angle at every vertex of a closed loop, in degrees.
///
/// Vertices with a zero-length neighbouring edge report `NaN`.
pub fn interior_angles(points: &[Coord<Real>]) -> Vec<Real> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            let v1 = prev - curr;
            let v2 = next - curr;
            let len = v1.x.hypot(v1.y) * v2.x.hypot(v2.y);
            if len == 0.0 {
                return Real::NAN;
            }
            let cos = ((v1.x * v2.x + v1.y * v2.y) / len).clamp(-1.0, 1.0);
            cos.acos() * 180.0 / PI
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: Real, y: Real) -> Coord<Real> {
        Coord { x, y }
    }

    #[test]
    fn hull_skips_interior_and_collinear_points() {
        let points = [
            c(0.0, 0.0),
            c(1.0, 0.0),
            c(2.0, 0.0),
            c(2.0, 2.0),
            c(1.0, 1.0),
            c(0.0, 2.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&c(1.0, 1.0)));
        assert!(!hull.contains(&c(1.0, 0.0)));
    }

    #[test]
    fn small_sets_pass_through() {
        let points = [c(1.0, 2.0), c(4.0, 6.0)];
        let result = rotate_points_to_smallest_box(&points);
        assert_eq!(result.degrees, 0.0);
        assert_eq!(result.points, points.to_vec());
        assert_relative_eq!(result.area, 12.0);
    }

    #[test]
    fn tilted_rectangle_is_straightened() {
        // 4 x 1 rectangle rotated by 30 degrees
        let rect = [c(0.0, 0.0), c(4.0, 0.0), c(4.0, 1.0), c(0.0, 1.0)];
        let tilted = rotate_polygon_degrees(&rect, 30.0);
        assert!(bounding_area(&tilted) > 4.5);

        let result = rotate_points_to_smallest_box(&tilted);
        assert_relative_eq!(result.area, 4.0, epsilon = 1e-9);
        let b = bounds(&result.points).unwrap();
        let (w, h) = (b.width(), b.height());
        assert!(
            ((w - 4.0).abs() < 1e-9 && (h - 1.0).abs() < 1e-9)
                || ((w - 1.0).abs() < 1e-9 && (h - 4.0).abs() < 1e-9)
        );
    }

    #[test]
    fn rotation_is_reported_for_holes() {
        let tri = [c(0.0, 0.0), c(3.0, 3.0), c(0.0, 6.0)];
        let result = rotate_points_to_smallest_box(&tri);
        let again = rotate_polygon_degrees(&tri, result.degrees);
        for (p, q) in result.points.iter().zip(&again) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn coincident_points_keep_a_finite_area() {
        let points = [c(1.0, 1.0), c(1.0, 1.0), c(1.0, 1.0)];
        let result = rotate_points_to_smallest_box(&points);
        assert_eq!(result.area, 0.0);
        assert_eq!(result.degrees, 0.0);
        assert_eq!(result.points.len(), 3);
    }

    #[test]
    fn equal_boxes_keep_the_first_hull_edge() {
        // every edge of an axis-aligned rectangle gives the same 4 x 1 box
        let rect = [c(0.0, 0.0), c(4.0, 0.0), c(4.0, 1.0), c(0.0, 1.0)];
        let hull = convex_hull(&rect);
        assert_eq!(hull.len(), 4);

        let candidate = |i: usize| (360.0 - line_angle(hull[i], hull[(i + 1) % 4])).rem_euclid(360.0);
        let result = rotate_points_to_smallest_box(&rect);
        assert_eq!(result.degrees, candidate(0));
        assert_relative_eq!(result.area, 4.0, epsilon = 1e-9);

        for i in 1..4 {
            let later = bounding_area(&rotate_polygon_degrees(&rect, candidate(i)));
            assert_relative_eq!(later, result.area, epsilon = 1e-9);
            assert_ne!(candidate(i), result.degrees);
        }
    }

    #[test]
    fn reported_rotation_stays_below_a_full_turn() {
        let shapes = [
            vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 1.0), c(0.0, 1.0)],
            vec![c(0.0, 0.0), c(3.0, 3.0), c(0.0, 6.0)],
            vec![c(2.0, 2.0), c(2.0, 2.0), c(2.0, 2.0), c(2.0, 2.0)],
        ];
        for shape in &shapes {
            let degrees = rotate_points_to_smallest_box(shape).degrees;
            assert!((0.0..360.0).contains(&degrees), "{degrees}");
        }
    }

    #[test]
    fn line_angles() {
        assert_relative_eq!(line_angle(c(0.0, 0.0), c(1.0, 1.0)), 45.0);
        assert_relative_eq!(line_angle(c(0.0, 0.0), c(-1.0, 0.0)), 180.0);
    }

    #[test]
    fn measurements_of_a_right_triangle() {
        let tri = [c(0.0, 0.0), c(3.0, 0.0), c(0.0, 4.0)];
        let lengths = edge_lengths(&tri);
        assert_relative_eq!(lengths[0], 3.0);
        assert_relative_eq!(lengths[1], 5.0);
        assert_relative_eq!(lengths[2], 4.0);

        let angles = interior_angles(&tri);
        assert_relative_eq!(angles[0], 90.0, epsilon = 1e-9);
        assert_relative_eq!(angles.iter().sum::<Real>(), 180.0, epsilon = 1e-9);
    }
}
