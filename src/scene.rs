// Scene module for gearbit

use crate::camera::Camera;
use crate::colour;
use crate::math::{deg_to_rad, Matrix4, Vector3, Vector4};
use crate::mesh::{Mesh, MeshRenderer, PolygonMode};
use crate::transform_stack::{StackUnderflow, TransformStack};
use crate::uniform::FrameUniforms;

/// A mesh placed in the world, spinning at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub position: Vector3,
    /// Axis the object spins around, in its own frame.
    pub spin_axis: Vector3,
    /// Spin rate in degrees per second.
    pub spin_rate: f32,
    pub scale: Vector3,
    pub fill: Vector4,
    /// Colour of the wireframe pass drawn over the fill.
    pub wire: Vector4,
}

impl SceneObject {
    /// A non-spinning, unscaled object at `position`, white with black edges.
    pub fn new(name: impl Into<String>, mesh: Mesh, position: Vector3) -> Self {
        Self {
            name: name.into(),
            mesh,
            position,
            spin_axis: Vector3::Y,
            spin_rate: 0.0,
            scale: Vector3::new(1.0, 1.0, 1.0),
            fill: colour::WHITE,
            wire: colour::BLACK,
        }
    }

    #[must_use]
    pub fn with_spin(mut self, axis: Vector3, degrees_per_second: f32) -> Self {
        self.spin_axis = axis;
        self.spin_rate = degrees_per_second;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_colours(mut self, fill: Vector4, wire: Vector4) -> Self {
        self.fill = fill;
        self.wire = wire;
        self
    }

    /// Appends this object's local transform at `time` seconds to `stack`.
    pub fn apply_transform(&self, stack: &mut TransformStack, time: f32) {
        stack.translate(self.position);
        if self.spin_rate != 0.0 {
            stack.rotate(deg_to_rad(self.spin_rate) * time, self.spin_axis);
        }
        stack.scale(self.scale);
    }
}

/// Everything drawn each frame, in draw order.
#[derive(Debug, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Five spinning shapes around the origin.
    pub fn demo() -> Self {
        let objects = vec![
            SceneObject::new("rectangle", Mesh::rectangle(), Vector3::new(-5.0, 0.0, 0.0))
                .with_spin(Vector3::new(0.0, 1.0, 0.0), 45.0)
                .with_colours(colour::STEEL_BLUE, colour::DARK_GRAY),
            SceneObject::new("triangle", Mesh::triangle(), Vector3::new(5.0, 0.0, 0.0))
                .with_spin(Vector3::new(1.0, 1.0, 0.0), 30.0)
                .with_colours(colour::DEEP_PINK, colour::DARK_GRAY),
            SceneObject::new("circle", Mesh::circle(1.0, 48), Vector3::new(2.0, 0.0, 7.0))
                .with_spin(Vector3::new(0.0, 1.0, 1.0), 50.0)
                .with_colours(colour::CRIMSON, colour::DARK_GRAY),
            SceneObject::new("cube", Mesh::cube(), Vector3::new(0.0, 0.0, -10.0))
                .with_spin(Vector3::new(1.0, 1.0, 1.0), 25.0)
                .with_colours(colour::TURQUOISE, colour::BLACK),
            SceneObject::new("sphere", Mesh::sphere(1.0, 24, 48), Vector3::new(0.0, 0.0, 10.0))
                .with_colours(colour::GOLD, colour::BRONZE),
        ];
        Self { objects }
    }

    /// Draws every object inside its own push/pop region on `stack`.
    ///
    /// Per object: model, view and projection matrices, the fill colour and
    /// a filled draw, then the wire colour and a wireframe draw.
    pub fn draw(
        &self,
        stack: &mut TransformStack,
        camera: &Camera,
        projection: &Matrix4,
        time: f32,
        renderer: &mut impl MeshRenderer,
    ) -> Result<(), StackUnderflow> {
        let view = camera.view_matrix();
        let mut uniforms = FrameUniforms::new(&Matrix4::IDENTITY, &view, projection);

        for object in &self.objects {
            stack.push_matrix();
            object.apply_transform(stack, time);
            uniforms.update_model(stack.model_matrix());
            uniforms.upload(renderer);

            renderer.set_colour(object.fill);
            renderer.draw_mesh(&object.mesh, PolygonMode::Fill);
            renderer.set_colour(object.wire);
            renderer.draw_mesh(&object.mesh, PolygonMode::Wireframe);
            stack.pop_matrix()?;
        }
        Ok(())
    }
}
