//! Shared types and configuration for the objview workspace.
//!
//! # Invariants
//! - Every configuration field has a default matching the stock demo scene.
//! - Types here carry no rendering or windowing dependencies.

pub mod config;
pub mod types;

pub use config::{CameraConfig, ConfigError, ShaderPaths, ViewerConfig, WindowConfig};
pub use types::{ColorChannel, LightingCommand, MotionMode, ShadingModel, StepSizes};
