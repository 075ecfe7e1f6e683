//! wgpu render backend for objview.
//!
//! Draws one loaded mesh with either the Phong or the basic pipeline.
//!
//! # Invariants
//! - Uniforms are written every frame before the draw call.
//! - Renderer never mutates the scene transform.
//! - Shader compile/link failures surface as errors, not panics.

mod gpu;
pub mod shaders;

pub use gpu::MeshRenderer;

/// Errors from building the render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader '{label}' failed to compile or link: {message}")]
    Shader { label: String, message: String },
    #[error("mesh has {0} vertices, more than a single draw call supports")]
    MeshTooLarge(usize),
}
