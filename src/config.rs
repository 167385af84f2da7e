// Engine settings with TOML support
//
// Every section uses `#[serde(default)]`, so a file that only overrides
// `[camera] speed` still loads. A `[keybindings.bindings]` table replaces
// the default bindings as a whole.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::error::GearbitError;
use crate::input::LogicalKey;
use crate::math::{deg_to_rad, Matrix4};

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub keybindings: KeyBindings,
}

impl EngineConfig {
    /// Load settings from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GearbitError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, GearbitError> {
        toml::from_str(content).map_err(|e| GearbitError::ConfigParse(e.to_string()))
    }

    /// Save settings to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GearbitError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GearbitError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Free-look camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Rotation speed in degrees per second.
    pub rotation_speed_degrees: f32,
    /// Starting position.
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            rotation_speed_degrees: 90.0,
            position: [0.0, 0.0, 0.0],
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    /// Projection matrix for a viewport with the given width/height ratio.
    #[must_use]
    pub fn matrix(&self, aspect: f32) -> Matrix4 {
        Matrix4::perspective_rh_gl(deg_to_rad(self.fov_degrees), aspect, self.near, self.far)
    }
}

/// Maps each logical key to the physical key that drives it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    pub bindings: HashMap<LogicalKey, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (LogicalKey::Forward, KeyCode::KeyW),
            (LogicalKey::Back, KeyCode::KeyS),
            (LogicalKey::StrafeLeft, KeyCode::KeyA),
            (LogicalKey::StrafeRight, KeyCode::KeyD),
            (LogicalKey::Up, KeyCode::KeyQ),
            (LogicalKey::Down, KeyCode::KeyE),
            (LogicalKey::PitchUp, KeyCode::KeyI),
            (LogicalKey::PitchDown, KeyCode::KeyK),
            (LogicalKey::YawLeft, KeyCode::KeyJ),
            (LogicalKey::YawRight, KeyCode::KeyL),
            (LogicalKey::RollLeft, KeyCode::KeyU),
            (LogicalKey::RollRight, KeyCode::KeyO),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// The physical key bound to `key`, if any.
    #[must_use]
    pub fn key_for(&self, key: LogicalKey) -> Option<KeyCode> {
        self.bindings.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_round_trips_through_toml() {
        let config = EngineConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
speed = 12.5
";
        let config = EngineConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.camera.speed, 12.5);
        assert_eq!(config.camera.rotation_speed_degrees, 90.0);
        assert_eq!(config.projection, ProjectionConfig::default());
        assert_eq!(config.keybindings.key_for(LogicalKey::Forward), Some(KeyCode::KeyW));
    }

    #[test]
    fn q_rises_and_e_sinks_by_default() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.key_for(LogicalKey::Up), Some(KeyCode::KeyQ));
        assert_eq!(bindings.key_for(LogicalKey::Down), Some(KeyCode::KeyE));
        assert_eq!(bindings.bindings.len(), LogicalKey::SCAN_ORDER.len());
    }

    #[test]
    fn bindings_table_replaces_defaults() {
        let toml_str = r#"
[keybindings.bindings]
forward = "ArrowUp"
back = "ArrowDown"
"#;
        let config = EngineConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.keybindings.key_for(LogicalKey::Forward), Some(KeyCode::ArrowUp));
        assert_eq!(config.keybindings.key_for(LogicalKey::Back), Some(KeyCode::ArrowDown));
        assert_eq!(config.keybindings.key_for(LogicalKey::YawLeft), None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml("[camera]\nspeed = \"fast\"\n").unwrap_err();
        assert!(matches!(err, GearbitError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("gearbit-config-does-not-exist.toml");
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, GearbitError::Io(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("gearbit-config-{}", std::process::id()));
        let path = dir.join("engine.toml");
        let mut config = EngineConfig::default();
        config.camera.position = [1.0, 2.0, 3.0];
        config.projection.fov_degrees = 75.0;

        config.save(&path).unwrap();
        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn projection_matrix_uses_degrees() {
        let projection = ProjectionConfig {
            fov_degrees: 90.0,
            ..ProjectionConfig::default()
        };
        let m = projection.matrix(2.0);
        assert_abs_diff_eq!(m.get(1, 1).unwrap(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.get(0, 0).unwrap(), 0.5, epsilon = 1e-6);
    }
}
