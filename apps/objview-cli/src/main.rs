use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use objview_assets::MeshData;
use objview_common::{CameraConfig, LightingCommand, ShadingModel, StepSizes};
use objview_input::{Action, CAMERA_BINDINGS, Key, OBJECT_BINDINGS, key_action};
use objview_render::{DebugTextRenderer, FrameUniforms, RenderContext, Renderer};
use objview_transform::{Operation, SceneTransform};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "objview-cli", about = "Headless tool for objview meshes and transforms")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and default scene parameters
    Info,
    /// List key bindings
    Bindings,
    /// Load an OBJ file and print its statistics
    Inspect {
        /// Path to the OBJ file
        path: PathBuf,
    },
    /// Apply an operation sequence for a number of frames and print the uniforms
    Simulate {
        /// Comma-separated operations applied each frame, e.g. move-forward,yaw-left
        #[arg(long, value_delimiter = ',', required = true)]
        ops: Vec<Operation>,
        /// Number of frames to simulate
        #[arg(short, long, default_value = "1")]
        frames: u32,
        /// Viewport aspect ratio (width / height)
        #[arg(long, default_value = "1.0")]
        aspect: f32,
        /// Shading model that decides which matrices are printed
        #[arg(long, value_enum, default_value = "phong")]
        shading: ShadingArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShadingArg {
    Phong,
    Basic,
}

impl From<ShadingArg> for ShadingModel {
    fn from(arg: ShadingArg) -> Self {
        match arg {
            ShadingArg::Phong => ShadingModel::Phong,
            ShadingArg::Basic => ShadingModel::Basic,
        }
    }
}

/// Run `ops` in order once per frame from the default camera.
fn simulate(ops: &[Operation], frames: u32, aspect: f32) -> SceneTransform {
    let mut scene = SceneTransform::from_camera(&CameraConfig::default(), aspect);
    for _ in 0..frames {
        scene.apply_all(ops.iter().copied());
    }
    scene
}

fn describe_action(action: Action) -> String {
    match action {
        Action::Close => "close window".into(),
        Action::Lighting(LightingCommand::ToggleChannel(channel)) => {
            format!("toggle {channel:?} channel").to_lowercase()
        }
        Action::Lighting(LightingCommand::ResetChannels) => "reset colour channels".into(),
        Action::Lighting(LightingCommand::ToggleLight) => "toggle light".into(),
    }
}

fn print_bindings() {
    println!("Camera (held):");
    for (key, op) in CAMERA_BINDINGS {
        println!("  {:<6} {op}", key.label());
    }
    println!("Object (held):");
    for (key, op) in OBJECT_BINDINGS {
        println!("  {:<6} {op}", key.label());
    }
    println!("Mouse:");
    println!("  LMB + drag down  {}", Operation::DollyIn);
    println!("  LMB + drag up    {}", Operation::DollyOut);
    println!("Actions (on press):");
    let keys = [
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit6,
        Key::Escape,
    ];
    for key in keys {
        if let Some(action) = key_action(key) {
            println!("  {:<6} {}", key.label(), describe_action(action));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let camera = CameraConfig::default();
            let steps = StepSizes::default();
            println!("objview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("operations: {}", Operation::ALL.len());
            println!(
                "camera: eye={} target={} up={} fov={}° near={} far={}",
                camera.eye, camera.target, camera.up, camera.fov_degrees, camera.near, camera.far
            );
            println!(
                "steps: translate={} scale={} rotate={}° dolly={}",
                steps.translate, steps.scale, steps.rotate_degrees, steps.dolly
            );
        }
        Commands::Bindings => print_bindings(),
        Commands::Inspect { path } => {
            let mesh = MeshData::load_obj(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            println!("file: {}", path.display());
            println!("triangles: {}", mesh.triangle_count());
            println!("vertices: {}", mesh.vertex_count());
            if let Some(bounds) = mesh.bounds() {
                println!("bounds: min={} max={}", bounds.min, bounds.max);
                println!("center: {} size: {}", bounds.center(), bounds.size());
            }
            println!("fingerprint: {:016x}", mesh.fingerprint());
        }
        Commands::Simulate {
            ops,
            frames,
            aspect,
            shading,
        } => {
            anyhow::ensure!(aspect > 0.0, "aspect must be positive, got {aspect}");
            tracing::info!("simulating {} ops for {frames} frames", ops.len());
            let scene = simulate(&ops, frames, aspect);
            let ctx = RenderContext::new(shading.into());
            let out = DebugTextRenderer::new().render(&FrameUniforms::capture(&scene, &ctx));
            print!("{out}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn ops_parse_from_comma_list() {
        let cli = Cli::parse_from([
            "objview-cli",
            "simulate",
            "--ops",
            "move-forward,rotate-object-y",
            "--frames",
            "3",
        ]);
        match cli.command {
            Commands::Simulate { ops, frames, .. } => {
                assert_eq!(ops, vec![Operation::MoveForward, Operation::RotateObjectY]);
                assert_eq!(frames, 3);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn unknown_op_is_rejected() {
        let result = Cli::try_parse_from(["objview-cli", "simulate", "--ops", "fly-away"]);
        assert!(result.is_err());
    }

    #[test]
    fn simulate_repeats_per_frame() {
        let scene = simulate(&[Operation::MoveForward], 4, 1.0);
        let start = SceneTransform::from_camera(&CameraConfig::default(), 1.0);
        let moved = scene.view().inverse().w_axis.truncate();
        let origin = start.view().inverse().w_axis.truncate();
        // Four translation steps of 0.05 each.
        assert!((moved - origin).length() > 0.19);
        assert!((moved - origin).length() < 0.21);
        assert_eq!(scene.model(), glam::Mat4::IDENTITY);
    }

    #[test]
    fn zero_frames_leaves_scene_untouched() {
        let scene = simulate(&[Operation::ScaleUp], 0, 1.0);
        assert_eq!(scene.model().transform_point3(Vec3::ONE), Vec3::ONE);
    }

    #[test]
    fn every_edge_key_has_a_description() {
        for key in [Key::Digit1, Key::Digit4, Key::Digit6, Key::Escape] {
            let action = key_action(key).unwrap();
            assert!(!describe_action(action).is_empty());
        }
        assert_eq!(
            describe_action(key_action(Key::Digit2).unwrap()),
            "toggle green channel"
        );
    }
}
