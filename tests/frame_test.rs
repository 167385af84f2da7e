use approx::assert_abs_diff_eq;
use gearbit::math::{deg_to_rad, Matrix4, Quaternion, Vector3, Vector4};
use gearbit::transform_stack::StackUnderflow;
use gearbit::{
    Camera, EngineConfig, FrameUniforms, GearbitError, KeyboardState, LogSink, LogicalKey, Mesh,
    MeshRenderer, PolygonMode, Scene, TransformStack, UniformSink,
};
use winit::keyboard::KeyCode;

#[derive(Default)]
struct CountingSink {
    models: usize,
    views: usize,
    projections: usize,
    colours: usize,
    fills: usize,
    wireframes: usize,
}

impl UniformSink for CountingSink {
    fn set_uniform_mat4(&mut self, name: &str, _matrix: &[f32; 16]) {
        match name {
            "uModel" => self.models += 1,
            "uView" => self.views += 1,
            "uProjection" => self.projections += 1,
            other => panic!("unexpected uniform {other}"),
        }
    }

    fn set_uniform_vec4(&mut self, name: &str, _value: &[f32; 4]) {
        assert_eq!(name, "uColor");
        self.colours += 1;
    }
}

impl MeshRenderer for CountingSink {
    fn draw_mesh(&mut self, mesh: &Mesh, mode: PolygonMode) {
        assert!(mesh.triangle_count() > 0);
        match mode {
            PolygonMode::Fill => self.fills += 1,
            PolygonMode::Wireframe => self.wireframes += 1,
        }
    }
}

#[test]
fn camera_flies_forward_from_origin() {
    let mut camera = Camera::new(5.0, 90.0, Vector3::ZERO);
    camera.update(&|key: LogicalKey| key == LogicalKey::Forward, 1.0);
    assert_abs_diff_eq!(camera.position(), Vector3::new(0.0, 0.0, -5.0), epsilon = 1e-6);
    assert_abs_diff_eq!(camera.forward(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
}

#[test]
fn four_quarter_yaws_come_full_circle() {
    let mut camera = Camera::new(0.0, 90.0, Vector3::ZERO);
    let yaw_left = |key: LogicalKey| key == LogicalKey::YawLeft;

    camera.update(&yaw_left, 1.0);
    assert_abs_diff_eq!(camera.forward(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);

    for _ in 0..3 {
        camera.update(&yaw_left, 1.0);
    }
    assert_abs_diff_eq!(camera.forward(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    assert_abs_diff_eq!(camera.up(), Vector3::Y, epsilon = 1e-5);
    assert_abs_diff_eq!(camera.orientation().length(), 1.0, epsilon = 1e-6);
}

#[test]
fn keyboard_drives_diagonal_strafe_at_constant_speed() {
    let config = EngineConfig::default();
    let mut camera = Camera::from_config(&config.camera);
    let mut keyboard = KeyboardState::new(config.keybindings.clone());
    keyboard.press(KeyCode::KeyW);
    keyboard.press(KeyCode::KeyD);

    camera.update(&keyboard, 1.0);

    let h = 5.0 / 2.0_f32.sqrt();
    assert_abs_diff_eq!(camera.position(), Vector3::new(h, 0.0, -h), epsilon = 1e-5);
    assert_abs_diff_eq!(camera.position().length(), 5.0, epsilon = 1e-5);
}

#[test]
fn default_bindings_rise_on_q_and_sink_on_e() {
    let config = EngineConfig::default();
    let mut camera = Camera::from_config(&config.camera);
    let mut keyboard = KeyboardState::new(config.keybindings.clone());

    keyboard.press(KeyCode::KeyQ);
    camera.update(&keyboard, 1.0);
    assert_abs_diff_eq!(camera.position(), Vector3::new(0.0, 5.0, 0.0), epsilon = 1e-6);

    keyboard.release_all();
    keyboard.press(KeyCode::KeyE);
    camera.update(&keyboard, 2.0);
    assert_abs_diff_eq!(camera.position(), Vector3::new(0.0, -5.0, 0.0), epsilon = 1e-5);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut camera = Camera::new(5.0, 90.0, Vector3::new(1.0, 2.0, 3.0));
    let both = |key: LogicalKey| matches!(key, LogicalKey::Forward | LogicalKey::Back);
    camera.update(&both, 0.5);
    assert_eq!(camera.position(), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn view_matrix_puts_world_origin_in_front_of_camera() {
    let mut camera = Camera::new(5.0, 90.0, Vector3::new(0.0, 0.0, 5.0));
    let eye = camera.view_matrix().transform_point(Vector3::ZERO);
    assert_abs_diff_eq!(eye, Vector3::new(0.0, 0.0, -5.0), epsilon = 1e-6);

    // Turning right a quarter turn leaves the origin on the camera's left.
    camera.yaw(-deg_to_rad(90.0));
    let eye = camera.view_matrix().transform_point(Vector3::ZERO);
    assert_abs_diff_eq!(eye, Vector3::new(-5.0, 0.0, 0.0), epsilon = 1e-5);
}

#[test]
fn translate_then_rotate_on_the_stack() {
    let mut stack = TransformStack::new();
    stack.translate(Vector3::new(1.0, 0.0, 0.0));
    stack.rotate(deg_to_rad(90.0), Vector3::Y);
    let p = stack.model_matrix().transform_point(Vector3::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(p, Vector3::new(1.0, 0.0, -1.0), epsilon = 1e-6);
}

#[test]
fn push_translate_pop_returns_to_identity() {
    let mut stack = TransformStack::new();
    stack.push_matrix();
    stack.translate(Vector3::new(3.0, 4.0, 5.0));
    stack.pop_matrix().unwrap();
    assert_eq!(*stack.model_matrix(), Matrix4::IDENTITY);
}

#[test]
fn empty_pop_converts_into_crate_error() {
    let mut stack = TransformStack::new();
    let err: GearbitError = stack.pop_matrix().unwrap_err().into();
    assert!(matches!(err, GearbitError::StackUnderflow(StackUnderflow)));
    assert_eq!(*stack.model_matrix(), Matrix4::IDENTITY);
}

#[test]
fn one_frame_of_the_demo_scene() {
    let config = EngineConfig::default();
    let camera = Camera::new(0.0, 90.0, Vector3::new(0.0, 0.0, 20.0));
    let projection = config.projection.matrix(16.0 / 9.0);
    let scene = Scene::demo();
    let mut stack = TransformStack::new();
    let mut sink = CountingSink::default();

    scene
        .draw(&mut stack, &camera, &projection, 1.5, &mut sink)
        .unwrap();

    let n = scene.objects.len();
    assert_eq!((sink.models, sink.views, sink.projections), (n, n, n));
    assert_eq!((sink.colours, sink.fills, sink.wireframes), (2 * n, n, n));
    assert!(stack.is_balanced());
    assert_eq!(*stack.model_matrix(), Matrix4::IDENTITY);

    let mut log_sink = LogSink::default();
    scene
        .draw(&mut stack, &camera, &projection, 1.5, &mut log_sink)
        .unwrap();
    assert_eq!(log_sink.uploads(), 5 * n);
    assert_eq!(log_sink.draws(), 2 * n);
    let triangles: usize = scene.objects.iter().map(|o| o.mesh.triangle_count()).sum();
    assert_eq!(log_sink.triangles(), 2 * triangles);
}

#[test]
fn cube_lands_inside_clip_volume() {
    let camera = Camera::new(0.0, 90.0, Vector3::ZERO);
    let projection = EngineConfig::default().projection.matrix(1.0);
    let mut stack = TransformStack::new();
    stack.translate(Vector3::new(0.0, 0.0, -10.0));
    stack.rotate(deg_to_rad(25.0), Vector3::new(1.0, 1.0, 1.0));

    let uniforms = FrameUniforms::new(stack.model_matrix(), &camera.view_matrix(), &projection);
    let clip = uniforms.mvp() * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(clip.w, 10.0, epsilon = 1e-5);
    let ndc_z = clip.z / clip.w;
    assert!(ndc_z > -1.0 && ndc_z < 1.0);
}

#[test]
fn quaternion_matrix_agrees_with_axis_angle_matrix() {
    let axis = Vector3::new(0.0, 1.0, 1.0);
    let theta = deg_to_rad(50.0);
    let from_quat = Quaternion::from_axis_angle(axis, theta).to_mat4();
    let direct = Matrix4::from_axis_angle(axis, theta);
    assert_abs_diff_eq!(from_quat, direct, epsilon = 1e-5);
}
