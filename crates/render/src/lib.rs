//! Rendering adapter: renderer-agnostic frame state.
//!
//! # Invariants
//! - Renderers read [`FrameUniforms`]; they never mutate the scene transform.
//! - Shading model and lighting live in an explicit [`RenderContext`], not in globals.

mod context;
mod renderer;

pub use context::{Lighting, RenderContext};
pub use renderer::{DebugTextRenderer, FrameUniforms, Renderer};
