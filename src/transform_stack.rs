// Save/restore stack of model matrices for nested drawing

use std::fmt;

use crate::math::{Matrix4, Vector3};

/// Returned by [`TransformStack::pop_matrix`] when nothing has been pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackUnderflow;

impl fmt::Display for StackUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pop called on empty matrix stack")
    }
}

impl std::error::Error for StackUnderflow {}

/// One accumulated local-to-world matrix plus a LIFO of saved copies, so
/// nested local frames can be drawn without an explicit scene tree.
///
/// ```
/// use gearbit::math::{deg_to_rad, Vector3};
/// use gearbit::TransformStack;
///
/// let mut stack = TransformStack::new();
/// stack.push_matrix();
/// stack.translate(Vector3::new(0.0, 0.0, -10.0));
/// stack.rotate(deg_to_rad(25.0), Vector3::new(1.0, 1.0, 1.0));
/// let model = *stack.model_matrix();
/// stack.pop_matrix()?;
/// assert!(stack.is_balanced());
/// # let _ = model;
/// # Ok::<(), gearbit::transform_stack::StackUnderflow>(())
/// ```
///
/// Owned by the render loop and passed by `&mut` to drawing code. Not
/// synchronized.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Matrix4,
    saved: Vec<Matrix4>,
}

impl TransformStack {
    /// Creates a stack with an identity current matrix and nothing saved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Matrix4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Resets the current matrix to identity. Saved matrices are kept.
    pub fn load_identity(&mut self) {
        self.current = Matrix4::IDENTITY;
    }

    /// Right-multiplies the current matrix by `m`, so `m` acts in the local
    /// frame set up by earlier calls.
    pub fn apply(&mut self, m: &Matrix4) {
        self.current = self.current.multiply(m);
    }

    pub fn translate(&mut self, t: Vector3) {
        self.apply(&Matrix4::from_translation(t));
    }

    /// Rotates `theta` radians about `axis` in the current local frame.
    pub fn rotate(&mut self, theta: f32, axis: Vector3) {
        self.apply(&Matrix4::from_axis_angle(axis, theta));
    }

    pub fn rotate_x(&mut self, theta: f32) {
        self.apply(&Matrix4::from_rotation_x(theta));
    }

    pub fn rotate_y(&mut self, theta: f32) {
        self.apply(&Matrix4::from_rotation_y(theta));
    }

    pub fn rotate_z(&mut self, theta: f32) {
        self.apply(&Matrix4::from_rotation_z(theta));
    }

    pub fn scale(&mut self, s: Vector3) {
        self.apply(&Matrix4::from_scale(s));
    }

    /// Saves a copy of the current matrix.
    pub fn push_matrix(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the most recently saved matrix.
    ///
    /// Popping an empty stack logs a warning and leaves the current matrix
    /// untouched; the returned error is only informational and drawing can
    /// carry on with the stale matrix.
    pub fn pop_matrix(&mut self) -> Result<(), StackUnderflow> {
        match self.saved.pop() {
            Some(m) => {
                self.current = m;
                Ok(())
            }
            None => {
                log::warn!("{}", StackUnderflow);
                Err(StackUnderflow)
            }
        }
    }

    /// The current accumulated model matrix.
    #[must_use]
    pub fn model_matrix(&self) -> &Matrix4 {
        &self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// True when every push has been matched by a pop.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty()
    }
}
