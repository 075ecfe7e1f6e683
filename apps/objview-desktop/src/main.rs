mod hud;
mod keymap;
mod state;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use egui::Context as EguiContext;
use hud::{MeshSummary, draw_hud};
use objview_assets::{MeshData, ShaderSources};
use objview_common::{MotionMode, ShaderPaths, ShadingModel, ViewerConfig};
use objview_render_wgpu::{MeshRenderer, shaders};
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "objview-desktop", about = "Interactive OBJ viewer")]
struct Cli {
    /// OBJ file to display (overrides the config file)
    #[arg(long)]
    object: Option<PathBuf>,

    /// Viewer configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shading model
    #[arg(long, value_enum)]
    shading: Option<ShadingArg>,

    /// Custom WGSL vertex shader
    #[arg(long, requires = "fragment_shader")]
    vertex_shader: Option<PathBuf>,

    /// Custom WGSL fragment shader
    #[arg(long, requires = "vertex_shader")]
    fragment_shader: Option<PathBuf>,

    /// Apply one increment per rendered frame instead of at a fixed rate
    #[arg(long)]
    per_frame: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
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

impl Cli {
    /// Load the config file (or defaults) and layer command-line overrides on top.
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if let Some(object) = &self.object {
            config.object = object.clone();
        }
        if let Some(shading) = self.shading {
            config.shading = shading.into();
        }
        if let (Some(vertex), Some(fragment)) = (&self.vertex_shader, &self.fragment_shader) {
            config.shaders = Some(ShaderPaths {
                vertex: vertex.clone(),
                fragment: fragment.clone(),
            });
        }
        if self.per_frame {
            config.motion = MotionMode::PerFrame;
        }
        Ok(config)
    }
}

fn shader_sources(config: &ViewerConfig) -> Result<ShaderSources> {
    match &config.shaders {
        Some(paths) => ShaderSources::load(&paths.vertex, &paths.fragment).with_context(|| {
            format!(
                "failed to read shaders {} / {}",
                paths.vertex.display(),
                paths.fragment.display()
            )
        }),
        None => Ok(shaders::builtin(config.shading)),
    }
}

/// GPU and window handles, created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: MeshRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    viewer: ViewerConfig,
    mesh: MeshData,
    shaders: ShaderSources,
    summary: MeshSummary,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    last_frame: Instant,
    init_error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(viewer: ViewerConfig, mesh: MeshData, shaders: ShaderSources) -> Self {
        let summary = MeshSummary {
            name: viewer
                .object
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| viewer.object.display().to_string()),
            triangles: mesh.triangle_count(),
        };
        Self {
            state: AppState::new(&viewer),
            viewer,
            mesh,
            shaders,
            summary,
            gpu: None,
            egui_ctx: EguiContext::default(),
            last_frame: Instant::now(),
            init_error: None,
        }
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title(self.viewer.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.viewer.window.width,
                self.viewer.window.height,
            ));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("objview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = MeshRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            &self.mesh,
            &self.shaders,
        )?;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend, {} vertices, '{}' shaders",
            adapter.get_info().backend.to_str(),
            renderer.vertex_count(),
            self.shaders.label
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f64().min(0.25);
        self.last_frame = now;
        self.state.update(dt);

        if self.state.close_requested() {
            event_loop.exit();
            return;
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = self.state.uniforms();
        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &uniforms);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            draw_hud(ctx, &self.state, &self.summary);
        });
        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.resize(size.width, size.height);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            // Releases always reach the viewer, or a button let go over the HUD
            // would stay held.
            if response.consumed && !is_release(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let Some(gpu) = &mut self.gpu else {
                    return;
                };
                gpu.config.width = new_size.width.max(1);
                gpu.config.height = new_size.height.max(1);
                gpu.surface.configure(&gpu.device, &gpu.config);
                gpu.renderer
                    .resize(&gpu.device, gpu.config.width, gpu.config.height);
                self.state.resize(gpu.config.width, gpu.config.height);
            }
            WindowEvent::Focused(false) => {
                self.state.input.clear();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.input.set_cursor_y(position.y);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state
                    .handle_mouse_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if code == KeyCode::F1 && pressed && !repeat {
                    self.state.show_hud = !self.state.show_hud;
                } else if let Some(key) = keymap::map_key(code) {
                    self.state.handle_key(key, pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

/// Button and key releases, which must not be swallowed by the HUD.
fn is_release(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::MouseInput { state, .. } => *state == ElementState::Released,
        WindowEvent::KeyboardInput { event, .. } => event.state == ElementState::Released,
        _ => false,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let viewer = cli.viewer_config()?;
    tracing::info!(
        "objview-desktop starting: {} ({} shading)",
        viewer.object.display(),
        viewer.shading
    );

    let mesh = MeshData::load_obj(&viewer.object)
        .with_context(|| format!("failed to load {}", viewer.object.display()))?;
    let shaders = shader_sources(&viewer)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(viewer, mesh, shaders);
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_defaults() {
        let cli = Cli::parse_from([
            "objview-desktop",
            "--object",
            "teapot.obj",
            "--shading",
            "basic",
            "--per-frame",
        ]);
        let config = cli.viewer_config().unwrap();
        assert_eq!(config.object, PathBuf::from("teapot.obj"));
        assert_eq!(config.shading, ShadingModel::Basic);
        assert_eq!(config.motion, MotionMode::PerFrame);
        assert!(config.shaders.is_none());
    }

    #[test]
    fn custom_shaders_need_both_stages() {
        assert!(
            Cli::try_parse_from(["objview-desktop", "--vertex-shader", "a.wgsl"]).is_err()
        );
        let cli = Cli::parse_from([
            "objview-desktop",
            "--vertex-shader",
            "a.wgsl",
            "--fragment-shader",
            "b.wgsl",
        ]);
        let paths = cli.viewer_config().unwrap().shaders.unwrap();
        assert_eq!(paths.vertex, PathBuf::from("a.wgsl"));
        assert_eq!(paths.fragment, PathBuf::from("b.wgsl"));
    }

    #[test]
    fn builtin_shaders_follow_shading_model() {
        let config = ViewerConfig {
            shading: ShadingModel::Basic,
            ..ViewerConfig::default()
        };
        let sources = shader_sources(&config).unwrap();
        assert_eq!(sources, shaders::builtin(ShadingModel::Basic));
    }

    #[test]
    fn mouse_release_is_never_swallowed() {
        // SAFETY: the dummy id is only compared, never passed to the platform.
        let device_id = unsafe { winit::event::DeviceId::dummy() };
        let release = WindowEvent::MouseInput {
            device_id,
            state: ElementState::Released,
            button: MouseButton::Left,
        };
        let press = WindowEvent::MouseInput {
            device_id,
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert!(is_release(&release));
        assert!(!is_release(&press));
        assert!(!is_release(&WindowEvent::Focused(true)));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["objview-desktop", "--config", "/nonexistent/objview.json"]);
        assert!(cli.viewer_config().is_err());
    }
}
