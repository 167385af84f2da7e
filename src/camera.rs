// Quaternion free-look camera

use crate::config::CameraConfig;
use crate::input::{KeyInput, LogicalKey};
use crate::math::{deg_to_rad, Matrix4, Quaternion, Vector3};

/// Free-look camera with a position and a unit orientation.
///
/// The orientation maps camera-local axes to world axes. The basis is
/// re-derived from [`Camera::BASE_SIDE`], [`Camera::BASE_UP`] and
/// [`Camera::BASE_FORWARD`] on every query and re-orthonormalized with cross
/// products, so the returned axes stay orthogonal however much rotation has
/// accumulated. The camera looks down its local `-Z`.
///
/// ```
/// use gearbit::input::LogicalKey;
/// use gearbit::math::Vector3;
/// use gearbit::Camera;
///
/// let mut camera = Camera::new(5.0, 90.0, Vector3::ZERO);
/// camera.update(&|key: LogicalKey| key == LogicalKey::Forward, 1.0);
/// assert_eq!(camera.position(), Vector3::new(0.0, 0.0, -5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Rotation speed in radians per second.
    pub rotation_speed: f32,
    position: Vector3,
    orientation: Quaternion,
}

impl Camera {
    pub const BASE_SIDE: Vector3 = Vector3::X;
    pub const BASE_UP: Vector3 = Vector3::Y;
    pub const BASE_FORWARD: Vector3 = Vector3::Z;

    /// Creates a camera with identity orientation.
    ///
    /// `rotation_degrees` is the rotation speed in degrees per second.
    #[must_use]
    pub fn new(speed: f32, rotation_degrees: f32, position: Vector3) -> Self {
        log::debug!(
            "camera at {:?}, speed {}, rotation {} deg/s",
            position,
            speed,
            rotation_degrees
        );
        Self {
            speed,
            rotation_speed: deg_to_rad(rotation_degrees),
            position,
            orientation: Quaternion::IDENTITY,
        }
    }

    #[must_use]
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            config.speed,
            config.rotation_speed_degrees,
            Vector3::from(config.position),
        )
    }

    #[must_use]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Replaces the orientation. The quaternion is normalized on the way in.
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation.normalize();
    }

    /// `(forward, side, up)` for the current orientation.
    fn basis(&self) -> (Vector3, Vector3, Vector3) {
        let rotation = self.orientation.to_mat3();
        let back = rotation.multiply_vec3(Self::BASE_FORWARD).normalize();
        let raw_up = rotation.multiply_vec3(Self::BASE_UP).normalize();

        let forward = -back;
        let side = raw_up.cross(back).normalize();
        let up = side.cross(forward).normalize();
        (forward, side, up)
    }

    /// Unit view direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.basis().0
    }

    /// Unit right-hand side direction in world space.
    #[must_use]
    pub fn side(&self) -> Vector3 {
        self.basis().1
    }

    /// Unit up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.basis().2
    }

    /// Rotates `theta` radians about the camera's current side axis.
    /// Positive values look up.
    pub fn pitch(&mut self, theta: f32) {
        self.rotate_about(self.side(), theta);
    }

    /// Rotates `theta` radians about the camera's current up axis.
    /// Positive values turn left.
    pub fn yaw(&mut self, theta: f32) {
        self.rotate_about(self.up(), theta);
    }

    /// Rotates `theta` radians about the camera's current view direction.
    /// Positive values roll clockwise as seen by the camera.
    pub fn roll(&mut self, theta: f32) {
        self.rotate_about(self.forward(), theta);
    }

    // The incremental rotation goes on the left: `axis` is already in world
    // space, so this turns the camera about its own axis.
    fn rotate_about(&mut self, axis: Vector3, theta: f32) {
        let step = Quaternion::from_axis_angle(axis, theta);
        self.orientation = step.multiply(self.orientation).normalize();
    }

    /// World-to-camera matrix: the transposed orientation times a
    /// translation by `-position`.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        let inverse_rotation = self.orientation.to_mat4().transpose();
        inverse_rotation * Matrix4::from_translation(-self.position)
    }

    /// Advances the camera by one frame of held keys.
    ///
    /// Movement keys add up to a direction that is normalized before scaling
    /// by `speed * dt`, so diagonal movement is no faster. Each held rotation
    /// key then applies a full `rotation_speed * dt` turn, pitch first, then
    /// yaw, then roll. `dt` is used as given.
    pub fn update(&mut self, input: &impl KeyInput, dt: f32) {
        let (forward, side, up) = self.basis();
        let moves = [
            (LogicalKey::Forward, forward),
            (LogicalKey::Back, -forward),
            (LogicalKey::StrafeLeft, -side),
            (LogicalKey::StrafeRight, side),
            (LogicalKey::Up, up),
            (LogicalKey::Down, -up),
        ];

        let mut direction = Vector3::ZERO;
        for (key, axis) in moves {
            if input.is_key_held(key) {
                direction += axis;
            }
        }
        if direction.length() > 0.0 {
            self.position += direction.normalize() * (self.speed * dt);
            log::trace!("camera moved to {:?}", self.position);
        }

        let step = self.rotation_speed * dt;
        if input.is_key_held(LogicalKey::PitchUp) {
            self.pitch(step);
        }
        if input.is_key_held(LogicalKey::PitchDown) {
            self.pitch(-step);
        }
        if input.is_key_held(LogicalKey::YawLeft) {
            self.yaw(step);
        }
        if input.is_key_held(LogicalKey::YawRight) {
            self.yaw(-step);
        }
        if input.is_key_held(LogicalKey::RollLeft) {
            self.roll(-step);
        }
        if input.is_key_held(LogicalKey::RollRight) {
            self.roll(step);
        }

        self.orientation = self.orientation.normalize();
    }
}

impl Default for Camera {
    /// A stationary camera at the origin turning at 45 degrees per second.
    fn default() -> Self {
        Self::new(0.0, 45.0, Vector3::ZERO)
    }
}
