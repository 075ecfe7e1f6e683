use serde::{Deserialize, Serialize};

/// Increment applied by a single discrete transform operation.
///
/// The magnitudes are tiny because held inputs fire every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSizes {
    /// Linear step for camera and object translation.
    pub translate: f32,
    /// Fractional step for uniform scaling (0.01 = 1%).
    pub scale: f32,
    /// Angular step for rotations, in degrees.
    pub rotate_degrees: f32,
    /// Linear step for the mouse dolly.
    pub dolly: f32,
}

impl StepSizes {
    pub const DEFAULT: Self = Self {
        translate: 0.05,
        scale: 0.01,
        rotate_degrees: 0.05,
        dolly: 0.1,
    };
}

impl Default for StepSizes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which shader pipeline draws the object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingModel {
    /// Ambient + diffuse + specular lighting with separate M/V/P uniforms.
    #[default]
    Phong,
    /// Unlit shading driven by the pre-multiplied combined transform.
    Basic,
}

impl std::fmt::Display for ShadingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadingModel::Phong => f.write_str("phong"),
            ShadingModel::Basic => f.write_str("basic"),
        }
    }
}

/// How held inputs are converted into operation ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum MotionMode {
    /// One tick per rendered frame; speed scales with frame rate.
    PerFrame,
    /// A fixed number of ticks per second, independent of frame rate.
    FixedRate { hz: f64 },
}

impl Default for MotionMode {
    fn default() -> Self {
        MotionMode::FixedRate { hz: 60.0 }
    }
}

/// A colour channel of the object's base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}

/// Lighting change requested by an edge-triggered key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingCommand {
    /// Flip one channel scalar between 1.0 and 0.0.
    ToggleChannel(ColorChannel),
    /// Set every channel scalar back to 1.0.
    ResetChannels,
    /// Switch the light on or off.
    ToggleLight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_steps_match_constants() {
        let s = StepSizes::default();
        assert_eq!(s.translate, 0.05);
        assert_eq!(s.scale, 0.01);
        assert_eq!(s.rotate_degrees, 0.05);
        assert_eq!(s.dolly, 0.1);
    }

    #[test]
    fn motion_mode_serde_tagged() {
        let json = serde_json::to_string(&MotionMode::PerFrame).unwrap();
        assert_eq!(json, r#"{"mode":"per-frame"}"#);

        let parsed: MotionMode =
            serde_json::from_str(r#"{"mode":"fixed-rate","hz":120.0}"#).unwrap();
        assert_eq!(parsed, MotionMode::FixedRate { hz: 120.0 });
    }

    #[test]
    fn shading_model_display() {
        assert_eq!(ShadingModel::Phong.to_string(), "phong");
        assert_eq!(ShadingModel::Basic.to_string(), "basic");
    }

    #[test]
    fn channel_indices_are_rgb_order() {
        assert_eq!(ColorChannel::Red.index(), 0);
        assert_eq!(ColorChannel::Green.index(), 1);
        assert_eq!(ColorChannel::Blue.index(), 2);
    }
}
