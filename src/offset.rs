//! Shift flattened loops into positive XY space.

use crate::float_types::Real;
use geo::Coord;

/// Translation derived from an outer loop, applied identically to the outer loop
/// and all of its holes.
///
/// Points are first made relative to the outer loop's first vertex, then shifted
/// by the most negative relative x and y, so the minimum of the outer loop lands
/// exactly on zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offsetter {
    first: Coord<Real>,
    offset: Coord<Real>,
}

impl Offsetter {
    /// Build the offsetter for an outer loop. An empty loop gives the identity.
    pub fn new(outer_loop: &[Coord<Real>]) -> Self {
        let Some(first) = outer_loop.first().copied() else {
            let origin = Coord { x: 0.0, y: 0.0 };
            return Self {
                first: origin,
                offset: origin,
            };
        };

        let (min_x, min_y) = outer_loop.iter().fold((0.0, 0.0), |(min_x, min_y): (Real, Real), p| {
            let v = *p - first;
            (min_x.min(v.x), min_y.min(v.y))
        });

        Self {
            first,
            offset: Coord { x: -min_x, y: -min_y },
        }
    }

    #[inline]
    pub fn apply(&self, p: Coord<Real>) -> Coord<Real> {
        (p - self.first) + self.offset
    }

    pub fn apply_loop(&self, points: &[Coord<Real>]) -> Vec<Coord<Real>> {
        points.iter().map(|p| self.apply(*p)).collect()
    }

    /// Total translation added to every point.
    pub fn translation(&self) -> Coord<Real> {
        self.offset - self.first
    }
}

/// Normalize an outer loop and its holes so the outer loop's minimum x and y are zero.
pub fn normalize_loops(
    outer_loop: &[Coord<Real>],
    other_loops: &[Vec<Coord<Real>>],
) -> (Vec<Coord<Real>>, Vec<Vec<Coord<Real>>>) {
    let offsetter = Offsetter::new(outer_loop);
    (
        offsetter.apply_loop(outer_loop),
        other_loops.iter().map(|hole| offsetter.apply_loop(hole)).collect(),
    )
}
