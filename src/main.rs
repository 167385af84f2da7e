// gearbit: headless fly-through of the demo scene

use std::error::Error;
use std::path::PathBuf;

use gearbit::{Camera, EngineConfig, FrameClock, KeyboardState, LogSink, Scene, TransformStack};
use winit::keyboard::KeyCode;

const FRAMES: u32 = 120;
const ASPECT: f32 = 1280.0 / 720.0;

/// Keys held during each part of the scripted flight.
fn scripted_keys(frame: u32) -> &'static [KeyCode] {
    match frame {
        0..=39 => &[KeyCode::KeyW],
        40..=59 => &[KeyCode::KeyW, KeyCode::KeyJ],
        60..=79 => &[KeyCode::KeyQ, KeyCode::KeyI],
        80..=99 => &[KeyCode::KeyD, KeyCode::KeyO],
        _ => &[],
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    let mut camera = Camera::from_config(&config.camera);
    let mut keyboard = KeyboardState::new(config.keybindings.clone());
    let projection = config.projection.matrix(ASPECT);
    let scene = Scene::demo();
    let mut stack = TransformStack::new();
    let mut sink = LogSink::default();
    let mut clock = FrameClock::new();

    for frame in 0..FRAMES {
        keyboard.release_all();
        for &code in scripted_keys(frame) {
            keyboard.press(code);
        }

        let dt = clock.tick();
        camera.update(&keyboard, dt);

        stack.load_identity();
        scene.draw(&mut stack, &camera, &projection, clock.total(), &mut sink)?;
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    let p = camera.position();
    let f = camera.forward();
    log::info!(
        "flew {} frames in {:.2}s: {} uniform uploads, {} draws, {} triangles",
        FRAMES,
        clock.total(),
        sink.uploads(),
        sink.draws(),
        sink.triangles()
    );
    log::info!(
        "camera at ({:.2}, {:.2}, {:.2}) looking ({:.2}, {:.2}, {:.2})",
        p.x,
        p.y,
        p.z,
        f.x,
        f.y,
        f.z
    );
    Ok(())
}
