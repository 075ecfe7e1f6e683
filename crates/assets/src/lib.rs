//! Asset loading: Wavefront OBJ meshes and WGSL shader sources.
//!
//! The renderer consumes [`MeshData`] and [`ShaderSources`], never raw files.
//!
//! # Invariants
//! - A loaded mesh has equal-length position, normal and UV sequences.
//! - A loaded mesh has at least one triangle.

mod obj;
mod shader;

pub use obj::{Bounds, MeshData};
pub use shader::ShaderSources;

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("mesh has no triangles")]
    EmptyMesh,
}
