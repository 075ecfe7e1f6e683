use glam::Vec3;
use objview_common::{LightingCommand, ShadingModel};

/// Lighting uniforms shared by the Phong pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light_position: Vec3,
    pub light_color: Vec3,
    /// Eye position used by the specular term.
    pub view_position: Vec3,
    /// Per-channel scalars multiplied into the base colour.
    pub channels: [f32; 3],
    pub light_on: bool,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            light_position: Vec3::new(0.0, 20.0, 5.0),
            light_color: Vec3::splat(0.8),
            view_position: Vec3::splat(100.0),
            channels: [1.0; 3],
            light_on: true,
        }
    }
}

impl Lighting {
    pub fn apply(&mut self, command: LightingCommand) {
        match command {
            LightingCommand::ToggleChannel(channel) => {
                let c = &mut self.channels[channel.index()];
                *c = if *c > 0.0 { 0.0 } else { 1.0 };
            }
            LightingCommand::ResetChannels => self.channels = [1.0; 3],
            LightingCommand::ToggleLight => self.light_on = !self.light_on,
        }
        tracing::debug!(
            "lighting: channels={:?} light_on={}",
            self.channels,
            self.light_on
        );
    }
}

/// Rendering state owned by the frame loop and passed by reference to
/// whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderContext {
    pub shading: ShadingModel,
    pub lighting: Lighting,
}

impl RenderContext {
    pub fn new(shading: ShadingModel) -> Self {
        Self {
            shading,
            lighting: Lighting::default(),
        }
    }
}
