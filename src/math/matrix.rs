// Column-major matrix types
//
// Element `(row, col)` of an N x N matrix lives at index `col * N + row`.
// Constructors, multiplication and the raw arrays handed to shaders all rely
// on this ordering.

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::{Vector3, Vector4};

/// A 3x3 linear transform stored column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix3 {
    m: [f32; 9],
}

/// A 4x4 affine/projective transform stored column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4 {
    m: [f32; 16],
}

macro_rules! impl_matrix {
    ($name:ident, $n:literal, $len:literal) => {
        impl $name {
            /// Builds a matrix from its elements in column-major order.
            #[must_use]
            pub const fn from_cols_array(m: [f32; $len]) -> Self {
                Self { m }
            }

            /// Copies the elements out in column-major order.
            #[must_use]
            pub const fn to_cols_array(&self) -> [f32; $len] {
                self.m
            }

            /// Borrows the column-major storage, e.g. for a uniform upload.
            #[must_use]
            pub const fn as_array(&self) -> &[f32; $len] {
                &self.m
            }

            /// Element at `row`, `col`, or `None` outside the matrix.
            #[must_use]
            pub const fn get(&self, row: usize, col: usize) -> Option<f32> {
                if row < $n && col < $n {
                    Some(self.m[col * $n + row])
                } else {
                    None
                }
            }

            /// Standard matrix product `self * other`: applies `other` first,
            /// then `self`, to a column vector on the right.
            #[must_use]
            pub fn multiply(&self, other: &Self) -> Self {
                let mut m = [0.0; $len];
                for col in 0..$n {
                    for row in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += self.m[k * $n + row] * other.m[col * $n + k];
                        }
                        m[col * $n + row] = sum;
                    }
                }
                Self { m }
            }

            #[must_use]
            pub fn transpose(&self) -> Self {
                let mut m = [0.0; $len];
                for col in 0..$n {
                    for row in 0..$n {
                        m[row * $n + col] = self.m[col * $n + row];
                    }
                }
                Self { m }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.multiply(&rhs)
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.m
                    .iter()
                    .zip(&other.m)
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.m
                    .iter()
                    .zip(&other.m)
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix!(Matrix3, 3, 9);
impl_matrix!(Matrix4, 4, 16);

impl Matrix3 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_cols_array([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Column `c` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of range.
    #[must_use]
    pub fn col(&self, c: usize) -> Vector3 {
        Vector3::new(self.m[c * 3], self.m[c * 3 + 1], self.m[c * 3 + 2])
    }

    /// Rotation of `theta` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized first; a zero axis yields a degenerate
    /// scaling by `cos(theta)` rather than NaN.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, theta: f32) -> Self {
        let [c0, c1, c2] = rodrigues_columns(axis, theta);
        #[rustfmt::skip]
        let m = [
            c0.x, c0.y, c0.z,
            c1.x, c1.y, c1.z,
            c2.x, c2.y, c2.z,
        ];
        Self::from_cols_array(m)
    }

    #[must_use]
    pub fn multiply_vec3(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.multiply_vec3(rhs)
    }
}

impl Matrix4 {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_cols_array([
        1.0, 0.0, 0.0, 0.0, // column 0
        0.0, 1.0, 0.0, 0.0, // column 1
        0.0, 0.0, 1.0, 0.0, // column 2
        0.0, 0.0, 0.0, 1.0, // column 3
    ]);

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Column `c` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of range.
    #[must_use]
    pub fn col(&self, c: usize) -> Vector4 {
        let m = &self.m;
        Vector4::new(m[c * 4], m[c * 4 + 1], m[c * 4 + 2], m[c * 4 + 3])
    }

    #[must_use]
    #[rustfmt::skip]
    pub const fn from_translation(t: Vector3) -> Self {
        Self::from_cols_array([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            t.x, t.y, t.z, 1.0,
        ])
    }

    #[must_use]
    #[rustfmt::skip]
    pub const fn from_scale(s: Vector3) -> Self {
        Self::from_cols_array([
            s.x, 0.0, 0.0, 0.0,
            0.0, s.y, 0.0, 0.0,
            0.0, 0.0, s.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation of `theta` radians about an arbitrary `axis` (Rodrigues' formula).
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, theta: f32) -> Self {
        let [c0, c1, c2] = rodrigues_columns(axis, theta);
        #[rustfmt::skip]
        let m = [
            c0.x, c0.y, c0.z, 0.0,
            c1.x, c1.y, c1.z, 0.0,
            c2.x, c2.y, c2.z, 0.0,
            0.0,  0.0,  0.0,  1.0,
        ];
        Self::from_cols_array(m)
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn from_rotation_x(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols_array([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn from_rotation_y(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols_array([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn from_rotation_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols_array([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed perspective projection with an OpenGL `[-1, 1]` depth range.
    ///
    /// `fov_y` is the vertical field of view in radians.
    #[must_use]
    pub fn perspective_rh_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov_y * 0.5).tan();
        let z_range = far - near;

        let mut m = [0.0; 16];
        m[0] = 1.0 / (tan_half_fov * aspect);
        m[5] = 1.0 / tan_half_fov;
        m[10] = -(far + near) / z_range;
        m[11] = -1.0;
        m[14] = -2.0 * far * near / z_range;
        Self::from_cols_array(m)
    }

    #[must_use]
    pub fn multiply_vec4(&self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Transforms a point (`w = 1`). No perspective divide is performed.
    #[must_use]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        self.multiply_vec4(p.extend(1.0)).truncate()
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        self.multiply_vec4(rhs)
    }
}

/// The three columns of the rotation matrix about `axis` by `theta`.
fn rodrigues_columns(axis: Vector3, theta: f32) -> [Vector3; 3] {
    let n = axis.normalize();
    let (s, c) = theta.sin_cos();
    let ic = 1.0 - c;

    [
        Vector3::new(c + n.x * n.x * ic, n.y * n.x * ic + n.z * s, n.z * n.x * ic - n.y * s),
        Vector3::new(n.x * n.y * ic - n.z * s, c + n.y * n.y * ic, n.y * n.z * ic + n.x * s),
        Vector3::new(n.x * n.z * ic + n.y * s, n.y * n.z * ic - n.x * s, c + n.z * n.z * ic),
    ]
}
