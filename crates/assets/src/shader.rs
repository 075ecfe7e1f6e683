use crate::AssetError;
use std::path::Path;

/// WGSL source for a vertex/fragment shader pair.
///
/// The vertex stage must export `vs_main` and the fragment stage `fs_main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub label: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(
        label: impl Into<String>,
        vertex: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Read both stages from disk. The label is taken from the vertex file stem.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, AssetError> {
        let vertex_path = vertex_path.as_ref();
        let vertex = std::fs::read_to_string(vertex_path)?;
        let fragment = std::fs::read_to_string(fragment_path.as_ref())?;
        let label = vertex_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom")
            .to_string();
        tracing::debug!("loaded shader sources '{label}'");
        Ok(Self::new(label, vertex, fragment))
    }
}
