// gearbit: column-major 3D math, a quaternion free-look camera and an
// OpenGL-style matrix stack
//
// Nothing here talks to a GPU. Matrices, colours and meshes are handed to a
// `MeshRenderer`, and keyboard state comes in through `KeyInput`, so a
// renderer can be plugged in on either side.

pub mod camera;
pub mod colour;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod time;
pub mod transform_stack;
pub mod uniform;

pub use camera::Camera;
pub use config::{CameraConfig, EngineConfig, KeyBindings, ProjectionConfig};
pub use error::GearbitError;
pub use input::{KeyInput, KeyboardState, LogicalKey};
pub use mesh::{Mesh, MeshRenderer, PolygonMode};
pub use scene::{Scene, SceneObject};
pub use time::FrameClock;
pub use transform_stack::TransformStack;
pub use uniform::{FrameUniforms, LogSink, UniformSink};
