use crate::types::{MotionMode, ShadingModel, StepSizes};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading a viewer configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "objview".into(),
            width: 800,
            height: 800,
        }
    }
}

/// Initial look-at and perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -40.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

/// Paths to a vertex/fragment WGSL pair overriding the built-in shaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// Top-level viewer configuration.
///
/// Every field has a default, so an empty JSON object is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub object: PathBuf,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub shading: ShadingModel,
    pub steps: StepSizes,
    pub motion: MotionMode,
    pub shaders: Option<ShaderPaths>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            object: PathBuf::from("assets/cube.obj"),
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            shading: ShadingModel::default(),
            steps: StepSizes::default(),
            motion: MotionMode::default(),
            shaders: None,
        }
    }
}

impl ViewerConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(file)?;
        tracing::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Aspect ratio of the configured window.
    pub fn aspect(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_demo_scene() {
        let config = ViewerConfig::default();
        assert_eq!(config.camera.eye, Vec3::new(0.0, 0.0, -40.0));
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.aspect(), 1.0);
        assert_eq!(config.shading, ShadingModel::Phong);
    }

    #[test]
    fn empty_object_is_default() {
        let parsed: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ViewerConfig::default());
    }

    #[test]
    fn partial_override() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{ "shading": "basic", "steps": {{ "translate": 0.2 }}, "motion": {{ "mode": "per-frame" }} }}"#
        )
        .unwrap();

        let config = ViewerConfig::load(tmp.path()).unwrap();
        assert_eq!(config.shading, ShadingModel::Basic);
        assert_eq!(config.steps.translate, 0.2);
        assert_eq!(config.steps.scale, 0.01);
        assert_eq!(config.motion, MotionMode::PerFrame);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut config = ViewerConfig::default();
        config.window.title = "cat".into();
        config.save(tmp.path()).unwrap();

        let loaded = ViewerConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ViewerConfig::load("/nonexistent/objview.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "{{ not json").unwrap();
        let err = ViewerConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
