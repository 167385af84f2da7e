// Vector types for the spatial core

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::clamp;

/// A 2D vector of single-precision floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector of single-precision floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector of single-precision floats, usually a homogeneous point or direction.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_vector {
    ($name:ident, $n:literal, $($field:ident),+) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// Creates a vector from its components.
            #[must_use]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Multiplies every component by `s`.
            #[must_use]
            pub fn scale(self, s: f32) -> Self {
                Self { $($field: self.$field * s),+ }
            }

            #[must_use]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            #[must_use]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean norm.
            #[must_use]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns the unit vector pointing the same way.
            ///
            /// A zero-length vector normalizes to [`Self::ZERO`] instead of
            /// dividing by zero. Components are first divided by the largest
            /// magnitude, so huge or tiny vectors do not overflow or
            /// underflow on the way.
            #[must_use]
            pub fn normalize(self) -> Self {
                let largest = 0.0_f32 $(.max(self.$field.abs()))+;
                if largest == 0.0 {
                    return Self::ZERO;
                }
                let scaled = Self { $($field: self.$field / largest),+ };
                let length = scaled.length();
                Self { $($field: scaled.$field / length),+ }
            }

            #[must_use]
            pub fn distance(self, other: Self) -> f32 {
                self.distance_squared(other).sqrt()
            }

            #[must_use]
            pub fn distance_squared(self, other: Self) -> f32 {
                (self - other).length_squared()
            }

            /// Linear interpolation: `self + (other - self) * t`.
            ///
            /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
            #[must_use]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self).scale(t)
            }

            /// Clamps each component into `[min, max]` of the matching axis.
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($field: clamp(self.$field, min.$field, max.$field)),+ }
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                self.scale(rhs)
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(array: [f32; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                [$(v.$field),+]
            }
        }

        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                true $(&& approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }
    };
}

impl_vector!(Vector2, 2, x, y);
impl_vector!(Vector3, 3, x, y, z);
impl_vector!(Vector4, 4, x, y, z, w);

impl Vector3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Appends a `w` component.
    #[must_use]
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl Vector4 {
    /// Drops the `w` component.
    #[must_use]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
