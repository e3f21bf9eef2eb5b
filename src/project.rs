//! Planar projection: turn a face so its normal points along the reference axis,
//! then drop the depth coordinate.

use crate::errors::ValidationError;
use crate::face::Face;
use crate::float_types::Real;
use crate::rotation::{reference_axis, rotate_loop, rotation_onto};
use geo::Coord;
use nalgebra::{Point3, UnitQuaternion};

/// A face after projection, before any in-plane rotation or offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFace {
    pub rotation: UnitQuaternion<Real>,
    pub outer_loop: Vec<Coord<Real>>,
    pub other_loops: Vec<Vec<Coord<Real>>>,
    /// Mean depth along the reference axis after rotation. Every vertex of a planar
    /// face shares it up to floating error.
    pub depth: Real,
}

/// Drop the coordinate along the reference axis `(0, 0, -1)`, keeping x and y.
#[inline]
pub fn drop_depth(p: &Point3<Real>) -> Coord<Real> {
    Coord { x: p.x, y: p.y }
}

fn check_finite(points: &[Point3<Real>]) -> Result<(), ValidationError> {
    match points.iter().find(|p| !p.iter().all(|c| c.is_finite())) {
        Some(bad) => Err(ValidationError::InvalidCoordinate(*bad)),
        None => Ok(()),
    }
}

/// Rotate every loop of `face` so its normal lands on the reference axis and
/// return the 2D loops. Point counts and ordering are preserved.
pub fn project_face(face: &Face) -> Result<ProjectedFace, ValidationError> {
    check_finite(&face.outer_loop)?;
    for hole in &face.other_loops {
        check_finite(hole)?;
    }

    let rotation = rotation_onto(&face.normal, &reference_axis())?;

    let outer_3d = rotate_loop(&rotation, &face.outer_loop);
    let depth = if outer_3d.is_empty() {
        0.0
    } else {
        outer_3d.iter().map(|p| p.z).sum::<Real>() / outer_3d.len() as Real
    };

    let outer_loop = outer_3d.iter().map(drop_depth).collect();
    let other_loops = face
        .other_loops
        .iter()
        .map(|hole| rotate_loop(&rotation, hole).iter().map(drop_depth).collect())
        .collect();

    Ok(ProjectedFace {
        rotation,
        outer_loop,
        other_loops,
        depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn square_at_height(z: Real, normal: Vector3<Real>) -> Face {
        Face::new(
            normal,
            vec![
                Point3::new(0.0, 0.0, z),
                Point3::new(1.0, 0.0, z),
                Point3::new(1.0, 1.0, z),
                Point3::new(0.0, 1.0, z),
            ],
            vec![],
        )
    }

    #[test]
    fn downward_face_is_unchanged() {
        let projected = project_face(&square_at_height(2.0, -Vector3::z())).unwrap();
        assert_eq!(projected.outer_loop[2], Coord { x: 1.0, y: 1.0 });
        assert!((projected.depth - 2.0).abs() < 1e-12);
    }

    #[test]
    fn upward_face_is_mirrored_in_x() {
        let projected = project_face(&square_at_height(0.0, Vector3::z())).unwrap();
        assert_eq!(projected.outer_loop.len(), 4);
        let p = projected.outer_loop[1];
        assert!((p.x + 1.0).abs() < 1e-12 && p.y.abs() < 1e-12);
    }

    #[test]
    fn vertical_face_keeps_its_shape() {
        // 2 x 3 rectangle in the XZ plane
        let face = Face::new(
            Vector3::y(),
            vec![
                Point3::new(0.0, 5.0, 0.0),
                Point3::new(2.0, 5.0, 0.0),
                Point3::new(2.0, 5.0, 3.0),
                Point3::new(0.0, 5.0, 3.0),
            ],
            vec![vec![Point3::new(1.0, 5.0, 1.0)]],
        );
        let projected = project_face(&face).unwrap();
        let a = projected.outer_loop[0];
        let b = projected.outer_loop[1];
        let c = projected.outer_loop[2];
        assert!(((b.x - a.x).hypot(b.y - a.y) - 2.0).abs() < 1e-12);
        assert!(((c.x - b.x).hypot(c.y - b.y) - 3.0).abs() < 1e-12);
        assert_eq!(projected.other_loops[0].len(), 1);
    }

    #[test]
    fn nan_vertex_is_reported() {
        let mut face = square_at_height(0.0, Vector3::z());
        face.other_loops.push(vec![Point3::new(Real::NAN, 0.0, 0.0)]);
        assert!(matches!(project_face(&face), Err(ValidationError::InvalidCoordinate(_))));
    }
}
