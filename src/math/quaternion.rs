// Unit quaternions for orientation

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::{Matrix3, Matrix4, Vector3};

/// Lengths at or below this are treated as degenerate by [`Quaternion::normalize`].
const DEGENERATE_LENGTH: f32 = 1e-12;

/// A rotation quaternion `(w, x, y, z)`.
///
/// Orientation-carrying quaternions are kept unit length: [`Quaternion::multiply`]
/// renormalizes its result, and a degenerate quaternion normalizes to
/// [`Quaternion::IDENTITY`] instead of NaN.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `theta` radians about `axis`.
    ///
    /// The axis is normalized, so any non-zero length works.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, theta: f32) -> Self {
        let n = axis.normalize();
        let (s, c) = (theta * 0.5).sin_cos();
        Self::new(c, n.x * s, n.y * s, n.z * s)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scales to unit length, falling back to identity for degenerate input.
    #[must_use]
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length.is_nan() || length <= DEGENERATE_LENGTH {
            return Self::IDENTITY;
        }
        Self::new(self.w / length, self.x / length, self.y / length, self.z / length)
    }

    /// Inverse rotation of a unit quaternion.
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Hamilton product `self * other` (apply `other`, then `self`), renormalized.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
        .normalize()
    }

    /// The columns of the equivalent rotation matrix.
    fn rotation_columns(self) -> [Vector3; 3] {
        let Self { w, x, y, z } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);

        [
            Vector3::new(1.0 - 2.0 * (yy + zz), 2.0 * (x * y + w * z), 2.0 * (x * z - w * y)),
            Vector3::new(2.0 * (x * y - w * z), 1.0 - 2.0 * (xx + zz), 2.0 * (y * z + w * x)),
            Vector3::new(2.0 * (x * z + w * y), 2.0 * (y * z - w * x), 1.0 - 2.0 * (xx + yy)),
        ]
    }

    #[must_use]
    pub fn to_mat3(self) -> Matrix3 {
        let [c0, c1, c2] = self.rotation_columns();
        #[rustfmt::skip]
        let m = [
            c0.x, c0.y, c0.z,
            c1.x, c1.y, c1.z,
            c2.x, c2.y, c2.z,
        ];
        Matrix3::from_cols_array(m)
    }

    #[must_use]
    pub fn to_mat4(self) -> Matrix4 {
        let [c0, c1, c2] = self.rotation_columns();
        #[rustfmt::skip]
        let m = [
            c0.x, c0.y, c0.z, 0.0,
            c1.x, c1.y, c1.z, 0.0,
            c2.x, c2.y, c2.z, 0.0,
            0.0,  0.0,  0.0,  1.0,
        ];
        Matrix4::from_cols_array(m)
    }

    /// Rotates `v` by this quaternion.
    #[must_use]
    pub fn rotate_vector(self, v: Vector3) -> Vector3 {
        self.to_mat3().multiply_vec3(v)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate_vector(rhs)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
