// Conversions to and from glam
//
// glam also stores matrices column-major, so conversions copy the arrays
// element for element.

use super::{Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Mat3> for Matrix3 {
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix3> for glam::Mat3 {
    fn from(m: Matrix3) -> Self {
        Self::from_cols_array(m.as_array())
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        Self::from_cols_array(m.as_array())
    }
}

// glam orders quaternion components (x, y, z, w).
impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::{Mat4, Quat, Vec3};

    #[test]
    fn constructors_match_glam() {
        let axis = Vector3::new(1.0, -2.0, 0.5);
        let theta = 0.83;

        let ours = Matrix4::from_axis_angle(axis, theta);
        let theirs = Mat4::from_axis_angle(Vec3::from(axis).normalize(), theta);
        assert_abs_diff_eq!(ours, Matrix4::from(theirs), epsilon = 1e-6);

        let t = Vector3::new(3.0, -1.0, 2.0);
        assert_eq!(Matrix4::from_translation(t), Matrix4::from(Mat4::from_translation(t.into())));
        assert_eq!(Matrix4::from_scale(t), Matrix4::from(Mat4::from_scale(t.into())));

        assert_abs_diff_eq!(
            Matrix4::from_rotation_x(theta),
            Matrix4::from(Mat4::from_rotation_x(theta)),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Matrix4::from_rotation_y(theta),
            Matrix4::from(Mat4::from_rotation_y(theta)),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Matrix4::from_rotation_z(theta),
            Matrix4::from(Mat4::from_rotation_z(theta)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn projection_matches_glam() {
        let ours = Matrix4::perspective_rh_gl(1.047, 16.0 / 9.0, 0.1, 100.0);
        let theirs = Mat4::perspective_rh_gl(1.047, 16.0 / 9.0, 0.1, 100.0);
        assert_abs_diff_eq!(ours, Matrix4::from(theirs), epsilon = 1e-5);
    }

    #[test]
    fn products_match_glam() {
        let a = Matrix4::from_axis_angle(Vector3::new(0.0, 1.0, 1.0), 0.4)
            * Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let b = Matrix4::from_scale(Vector3::new(2.0, 0.5, 1.0)) * Matrix4::from_rotation_z(1.2);
        let expected = Mat4::from(a) * Mat4::from(b);
        assert_abs_diff_eq!(a * b, Matrix4::from(expected), epsilon = 1e-5);
    }

    #[test]
    fn quaternions_match_glam() {
        let axis = Vector3::new(0.2, 0.9, -0.4);
        let q = Quaternion::from_axis_angle(axis, 2.1);
        let g = Quat::from_axis_angle(Vec3::from(axis).normalize(), 2.1);
        assert_abs_diff_eq!(q, Quaternion::from(g), epsilon = 1e-6);
        assert_abs_diff_eq!(q.to_mat4(), Matrix4::from(Mat4::from_quat(g)), epsilon = 1e-6);

        let r = Quaternion::from_axis_angle(Vector3::X, -0.7);
        let gr = Quat::from(r);
        assert_abs_diff_eq!(q * r, Quaternion::from(g * gr), epsilon = 1e-6);
    }
}
