//! Vector helpers and the "rotate vector A onto vector B" quaternion.

use crate::errors::ValidationError;
use crate::float_types::{PI, Real, tolerance};
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

/// Axis every face normal is rotated onto before the depth coordinate is dropped.
pub fn reference_axis() -> Vector3<Real> {
    -Vector3::z()
}

/// Normalize `v`, refusing zero-length and non-finite input instead of producing NaNs.
pub fn normalize(v: &Vector3<Real>) -> Result<Unit<Vector3<Real>>, ValidationError> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(ValidationError::DegenerateNormal { normal: *v });
    }
    Unit::try_new(*v, tolerance()).ok_or(ValidationError::DegenerateNormal { normal: *v })
}

/// Component-wise comparison within `epsilon`.
pub fn approx_equal(a: &Vector3<Real>, b: &Vector3<Real>, epsilon: Real) -> bool {
    (a - b).iter().all(|c| c.abs() <= epsilon)
}

/// A fixed axis perpendicular to `v`, used for the half-turn when `from` and `to`
/// point in opposite directions.
///
/// Picks `v × X`, or `v × Y` when `v` is (nearly) parallel to X. For the reference
/// axis `(0, 0, -1)` this is `-Y`, so a normal of `(0, 0, 1)` flips to
/// `(x, y, z) -> (-x, y, -z)`.
pub fn fixed_perpendicular(v: &Unit<Vector3<Real>>) -> Unit<Vector3<Real>> {
    let candidate = v.cross(&Vector3::x());
    Unit::try_new(candidate, tolerance())
        .unwrap_or_else(|| Unit::new_normalize(v.cross(&Vector3::y())))
}

/// Quaternion rotating direction `from` onto direction `to`.
///
/// The axis is `from × to` and the angle comes from `atan2(|from × to|, from · to)`,
/// which stays accurate right up to the anti-parallel case. Once the cross product
/// is below tolerance, parallel input gives the identity and anti-parallel input
/// gives a half-turn about [`fixed_perpendicular`] of `to`, so the output
/// orientation is reproducible.
pub fn rotation_onto(
    from: &Vector3<Real>,
    to: &Vector3<Real>,
) -> Result<UnitQuaternion<Real>, ValidationError> {
    let from = normalize(from)?;
    let to = normalize(to)?;

    let cross = from.cross(&*to);
    let dot = from.dot(&*to);
    match Unit::try_new(cross, tolerance()) {
        Some(axis) => Ok(UnitQuaternion::from_axis_angle(&axis, cross.norm().atan2(dot))),
        None if dot > 0.0 => Ok(UnitQuaternion::identity()),
        None => Ok(UnitQuaternion::from_axis_angle(&fixed_perpendicular(&to), PI)),
    }
}

/// Apply `rotation` to every point of a loop, keeping count and order.
pub fn rotate_loop(rotation: &UnitQuaternion<Real>, points: &[Point3<Real>]) -> Vec<Point3<Real>> {
    points.iter().map(|p| rotation * p).collect()
}
