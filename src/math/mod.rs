// Math utilities for the spatial core
//
// Single-precision vectors, column-major matrices and unit quaternions.
// Every operation is total: degenerate input resolves to a documented
// fallback value and nothing here returns an error.

mod interop;
mod matrix;
mod quaternion;
mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Clamps `x` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: with `min > max` the lower bound
/// is tested first.
#[must_use]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        return min;
    }
    if x > max {
        return max;
    }
    x
}
