// Shader uniform hand-off
//
// Matrices cross the rendering boundary as 16 column-major floats and
// colours as 4 RGBA floats. The renderer itself lives outside this crate;
// it only has to implement `UniformSink` and `MeshRenderer`.

use crate::math::{Matrix4, Vector4};
use crate::mesh::{Mesh, MeshRenderer, PolygonMode};

/// Uniform slot names used by the default shaders.
pub const MODEL_UNIFORM: &str = "uModel";
pub const VIEW_UNIFORM: &str = "uView";
pub const PROJECTION_UNIFORM: &str = "uProjection";
pub const COLOUR_UNIFORM: &str = "uColor";

/// Something that accepts named shader uniforms.
pub trait UniformSink {
    /// Uploads `matrix` (column-major) to the slot called `name`.
    fn set_uniform_mat4(&mut self, name: &str, matrix: &[f32; 16]);

    fn set_uniform_vec4(&mut self, name: &str, value: &[f32; 4]);

    /// Sets the `uColor` slot.
    fn set_colour(&mut self, colour: Vector4) {
        self.set_uniform_vec4(COLOUR_UNIFORM, &colour.into());
    }
}

/// Model, view and projection matrices for one draw call.
///
/// `#[repr(C)]` and `Pod`, so the block can be written to a uniform buffer
/// with `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub model: [f32; 16],
    pub view: [f32; 16],
    pub projection: [f32; 16],
}

impl FrameUniforms {
    #[must_use]
    pub fn new(model: &Matrix4, view: &Matrix4, projection: &Matrix4) -> Self {
        Self {
            model: model.to_cols_array(),
            view: view.to_cols_array(),
            projection: projection.to_cols_array(),
        }
    }

    pub fn update_model(&mut self, model: &Matrix4) {
        self.model = model.to_cols_array();
    }

    /// `projection * view * model`.
    #[must_use]
    pub fn mvp(&self) -> Matrix4 {
        let model = Matrix4::from_cols_array(self.model);
        let view = Matrix4::from_cols_array(self.view);
        let projection = Matrix4::from_cols_array(self.projection);
        projection * view * model
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Writes all three matrices to their named slots.
    pub fn upload(&self, sink: &mut impl UniformSink) {
        sink.set_uniform_mat4(MODEL_UNIFORM, &self.model);
        sink.set_uniform_mat4(VIEW_UNIFORM, &self.view);
        sink.set_uniform_mat4(PROJECTION_UNIFORM, &self.projection);
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(&Matrix4::IDENTITY, &Matrix4::IDENTITY, &Matrix4::IDENTITY)
    }
}

/// A sink that only logs what it receives, for headless runs.
#[derive(Debug, Default)]
pub struct LogSink {
    uploads: usize,
    draws: usize,
    triangles: usize,
}

impl LogSink {
    /// Uniform values received, matrices and colours alike.
    #[must_use]
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Triangles submitted over all draw calls.
    #[must_use]
    pub fn triangles(&self) -> usize {
        self.triangles
    }
}

impl UniformSink for LogSink {
    fn set_uniform_mat4(&mut self, name: &str, matrix: &[f32; 16]) {
        self.uploads += 1;
        log::trace!("{name} = {matrix:?}");
    }

    fn set_uniform_vec4(&mut self, name: &str, value: &[f32; 4]) {
        self.uploads += 1;
        log::trace!("{name} = {value:?}");
    }
}

impl MeshRenderer for LogSink {
    fn draw_mesh(&mut self, mesh: &Mesh, mode: PolygonMode) {
        self.draws += 1;
        self.triangles += mesh.triangle_count();
        log::trace!("draw {} triangles ({mode:?})", mesh.triangle_count());
    }
}
