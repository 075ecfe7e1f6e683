use crate::context::{Lighting, RenderContext};
use glam::Mat4;
use objview_common::ShadingModel;
use objview_transform::SceneTransform;
use std::fmt::Write;

/// Everything uploaded to the shader for one frame.
///
/// Captured after the frame's operations have been applied and before the
/// draw call, so the GPU never sees stale matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    /// Projection × View × Model.
    pub combined: Mat4,
    pub shading: ShadingModel,
    pub lighting: Lighting,
}

impl FrameUniforms {
    pub fn capture(scene: &SceneTransform, ctx: &RenderContext) -> Self {
        Self {
            model: scene.model(),
            view: scene.view(),
            projection: scene.projection(),
            combined: scene.combined(),
            shading: ctx.shading,
            lighting: ctx.lighting,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given uniforms.
    fn render(&self, uniforms: &FrameUniforms) -> Self::Output;
}

/// Text renderer for headless runs: prints the uniforms a GPU would receive.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn write_matrix(out: &mut String, name: &str, m: &Mat4) {
    let _ = writeln!(out, "{name}:");
    // Printed row by row; storage is column-major.
    for r in 0..4 {
        let row = m.row(r);
        let _ = writeln!(
            out,
            "  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]",
            row.x, row.y, row.z, row.w
        );
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, uniforms: &FrameUniforms) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Frame uniforms (shading={}) ===", uniforms.shading);
        if uniforms.shading == ShadingModel::Phong {
            write_matrix(&mut out, "model", &uniforms.model);
            write_matrix(&mut out, "view", &uniforms.view);
            write_matrix(&mut out, "projection", &uniforms.projection);
        }
        write_matrix(&mut out, "mvp", &uniforms.combined);

        let l = &uniforms.lighting;
        let _ = writeln!(
            out,
            "light: on={} position=({:.1}, {:.1}, {:.1}) channels=({:.1}, {:.1}, {:.1})",
            l.light_on,
            l.light_position.x,
            l.light_position.y,
            l.light_position.z,
            l.channels[0],
            l.channels[1],
            l.channels[2]
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objview_transform::Operation;

    #[test]
    fn capture_tracks_latest_scene() {
        let mut scene = SceneTransform::default();
        let ctx = RenderContext::default();
        let before = FrameUniforms::capture(&scene, &ctx);

        scene.apply(Operation::MoveForward);
        let after = FrameUniforms::capture(&scene, &ctx);

        assert_ne!(before.combined, after.combined);
        assert_eq!(after.combined, after.projection * after.view * after.model);
    }

    #[test]
    fn phong_output_lists_all_matrices() {
        let scene = SceneTransform::default();
        let ctx = RenderContext::new(ShadingModel::Phong);
        let out = DebugTextRenderer::new().render(&FrameUniforms::capture(&scene, &ctx));

        assert!(out.contains("shading=phong"));
        assert!(out.contains("model:"));
        assert!(out.contains("projection:"));
        assert!(out.contains("mvp:"));
        assert!(out.contains("on=true"));
    }

    #[test]
    fn basic_output_only_has_mvp() {
        let scene = SceneTransform::default();
        let ctx = RenderContext::new(ShadingModel::Basic);
        let out = DebugTextRenderer::new().render(&FrameUniforms::capture(&scene, &ctx));

        assert!(out.contains("mvp:"));
        assert!(!out.contains("model:"));
    }
}
