//! Validation errors

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// All the possible validation issues we might encounter while flattening a face
/// or configuring an export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (DegenerateNormal) The face normal is zero-length or has a NaN or infinite component
    #[error("(DegenerateNormal) The face normal ({normal}) cannot be normalized")]
    DegenerateNormal { normal: Vector3<Real> },
    /// (InvalidCoordinate) A loop vertex has a NaN or infinite coordinate
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (EmptyOuterLoop) A face has no outer boundary to flatten or draw
    #[error("(EmptyOuterLoop) Face {face} has an empty outer loop")]
    EmptyOuterLoop { face: usize },
    /// (InvalidUnitIndex) The unit index is outside 0..=5
    #[error("(InvalidUnitIndex) Unit index {0} is not one of 0 (in), 1 (ft), 2 (mm), 3 (cm), 4 (m), 5 (yd)")]
    InvalidUnitIndex(i64),
}
