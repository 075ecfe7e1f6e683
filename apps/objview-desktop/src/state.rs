use objview_common::{CameraConfig, ViewerConfig};
use objview_input::{Action, FrameClock, InputState, Key, frame_operations, key_action};
use objview_render::{FrameUniforms, RenderContext};
use objview_transform::{SceneTransform, perspective};

/// Everything the frame loop owns apart from GPU handles.
pub struct AppState {
    pub scene: SceneTransform,
    pub ctx: RenderContext,
    pub input: InputState,
    pub clock: FrameClock,
    pub show_hud: bool,
    pub ticks: u64,
    camera: CameraConfig,
    close_requested: bool,
}

impl AppState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            scene: SceneTransform::from_camera(&config.camera, config.aspect())
                .with_steps(config.steps),
            ctx: RenderContext::new(config.shading),
            input: InputState::new(),
            clock: FrameClock::new(config.motion),
            show_hud: true,
            ticks: 0,
            camera: config.camera,
            close_requested: false,
        }
    }

    /// Record a key transition and fire its edge-triggered action on press.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        if !pressed {
            self.input.release(key);
            return;
        }
        if !self.input.press(key) {
            return;
        }

        match key_action(key) {
            Some(Action::Close) => {
                tracing::info!("escape pressed; closing");
                self.close_requested = true;
            }
            Some(Action::Lighting(command)) => self.ctx.lighting.apply(command),
            None => {}
        }
    }

    pub fn handle_mouse_button(&mut self, pressed: bool) {
        self.input.set_left_mouse(pressed);
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply held-input operations for `dt` seconds of frame time.
    pub fn update(&mut self, dt: f64) {
        let ticks = self.clock.advance(dt);
        if ticks == 0 {
            // Keep the cursor baseline so motion in a tick-less frame still counts.
            return;
        }
        let ops = frame_operations(&self.input);
        if !ops.is_empty() {
            for _ in 0..ticks {
                self.scene.apply_all(ops.iter().copied());
            }
        }
        self.ticks += u64::from(ticks);
        self.input.end_frame();
    }

    /// Rebuild the projection for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        self.scene.set_projection(perspective(
            self.camera.fov_degrees,
            aspect,
            self.camera.near,
            self.camera.far,
        ));
    }

    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms::capture(&self.scene, &self.ctx)
    }
}
