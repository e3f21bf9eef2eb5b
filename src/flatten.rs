//! Face flattening pipeline: project → rotate to the smallest box → offset.

use crate::calipers::{RotationResult, rotate_points_to_smallest_box, rotate_polygon_degrees};
use crate::errors::ValidationError;
use crate::face::{Face, Face2d};
use crate::float_types::Real;
use crate::offset::Offsetter;
use crate::project::project_face;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A flattened face together with how it was oriented.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedFace {
    pub face: Face2d,
    /// In-plane rotation applied after projection, in degrees.
    pub degrees: Real,
    /// Area of the face's bounding box after rotation.
    pub area: Real,
}

/// Flatten one face. `index` is only used to name the face in errors and logs.
///
/// The rotation is chosen from the outer loop and applied unchanged to every hole,
/// and holes are offset with the outer loop's translation, so their placement
/// inside the outer boundary is preserved.
pub fn flatten_face(face: &Face, index: usize) -> Result<FlattenedFace, ValidationError> {
    if face.outer_loop.is_empty() {
        return Err(ValidationError::EmptyOuterLoop { face: index });
    }

    let projected = project_face(face)?;
    let RotationResult {
        points,
        degrees,
        area,
    } = rotate_points_to_smallest_box(&projected.outer_loop);

    let holes: Vec<_> = projected
        .other_loops
        .iter()
        .map(|hole| rotate_polygon_degrees(hole, degrees))
        .collect();

    let offsetter = Offsetter::new(&points);
    let face2d = Face2d::new(
        offsetter.apply_loop(&points),
        holes.iter().map(|hole| offsetter.apply_loop(hole)).collect(),
    );

    tracing::debug!(
        face = index,
        points = face2d.outer_loop.len(),
        holes = face2d.other_loops.len(),
        depth = projected.depth,
        degrees,
        area,
        "flattened face"
    );

    Ok(FlattenedFace {
        face: face2d,
        degrees,
        area,
    })
}

/// Flatten every face, failing on the first invalid one.
#[cfg(not(feature = "parallel"))]
pub fn flatten_faces(faces: &[Face]) -> Result<Vec<FlattenedFace>, ValidationError> {
    faces
        .iter()
        .enumerate()
        .map(|(i, face)| flatten_face(face, i))
        .collect()
}

/// Flatten every face, failing on the first invalid one.
#[cfg(feature = "parallel")]
pub fn flatten_faces(faces: &[Face]) -> Result<Vec<FlattenedFace>, ValidationError> {
    faces
        .par_iter()
        .enumerate()
        .map(|(i, face)| flatten_face(face, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn empty_outer_loop_is_rejected() {
        let face = Face::new(Vector3::z(), vec![], vec![]);
        assert_eq!(flatten_face(&face, 4), Err(ValidationError::EmptyOuterLoop { face: 4 }));
    }

    #[test]
    fn single_point_face_lands_on_origin() {
        let face = Face::new(Vector3::z(), vec![Point3::new(7.0, 8.0, 9.0)], vec![]);
        let flat = flatten_face(&face, 0).unwrap();
        assert_eq!(flat.degrees, 0.0);
        assert_eq!(flat.face.outer_loop.len(), 1);
        assert_eq!(flat.face.outer_loop[0].x, 0.0);
        assert_eq!(flat.face.outer_loop[0].y, 0.0);
    }

    #[test]
    fn bad_face_fails_the_batch() {
        let good = Face::new(Vector3::z(), vec![Point3::origin()], vec![]);
        let bad = Face::new(Vector3::zeros(), vec![Point3::origin()], vec![]);
        assert!(flatten_faces(&[good.clone()]).is_ok());
        assert!(matches!(
            flatten_faces(&[good, bad]),
            Err(ValidationError::DegenerateNormal { .. })
        ));
    }
}
