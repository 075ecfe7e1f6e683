use crate::AssetError;
use glam::Vec3;
use sha2::{Digest, Sha256};
use std::io::BufRead;
use std::path::Path;

/// De-indexed triangle data ready for a non-indexed draw call.
///
/// `positions`, `normals` and `uvs` always have the same length: one entry
/// per triangle corner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
}

/// Axis-aligned bounding box of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

impl MeshData {
    /// Load every model in an OBJ file into one mesh.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &load_options())?;
        let mesh = Self::from_models(&models)?;
        tracing::debug!(
            "loaded {} ({} models, {} triangles)",
            path.display(),
            models.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Load OBJ text from a reader. `mtllib` references are ignored.
    pub fn read_obj(reader: &mut impl BufRead) -> Result<Self, AssetError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(&models)
    }

    fn from_models(models: &[tobj::Model]) -> Result<Self, AssetError> {
        let mut mesh = MeshData::default();

        for model in models {
            let m = &model.mesh;
            let vertices = m.positions.len() / 3;
            // tobj only stores a normal/UV for vertices that reference one, so in a
            // file mixing `f 1//1 ..` with `f 1 ..` the arrays are short and no
            // longer line up with vertex indices. Only full arrays are trusted.
            let has_normals = m.normals.len() == 3 * vertices;
            let has_uvs = m.texcoords.len() == 2 * vertices;
            if !has_normals && !m.normals.is_empty() {
                tracing::debug!("'{}': partial normals, using face normals", model.name);
            }

            for tri in m.indices.chunks_exact(3) {
                let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
                let positions = corners.map(|i| {
                    [m.positions[3 * i], m.positions[3 * i + 1], m.positions[3 * i + 2]]
                });

                let normals = if has_normals {
                    corners.map(|i| {
                        [m.normals[3 * i], m.normals[3 * i + 1], m.normals[3 * i + 2]]
                    })
                } else {
                    [face_normal(&positions); 3]
                };

                let uvs = if has_uvs {
                    corners.map(|i| [m.texcoords[2 * i], m.texcoords[2 * i + 1]])
                } else {
                    [[0.0, 0.0]; 3]
                };

                mesh.positions.extend(positions);
                mesh.normals.extend(normals);
                mesh.uvs.extend(uvs);
            }
        }

        if mesh.positions.is_empty() {
            return Err(AssetError::EmptyMesh);
        }
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Bounds { min, max })
    }

    /// Content hash of the vertex data (first 8 bytes of SHA-256).
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Sha256::new();
        for p in &self.positions {
            for c in p {
                hasher.update(c.to_le_bytes());
            }
        }
        for n in &self.normals {
            for c in n {
                hasher.update(c.to_le_bytes());
            }
        }
        for uv in &self.uvs {
            for c in uv {
                hasher.update(c.to_le_bytes());
            }
        }
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}

fn face_normal(p: &[[f32; 3]; 3]) -> [f32; 3] {
    let a = Vec3::from_array(p[0]);
    let b = Vec3::from_array(p[1]);
    let c = Vec3::from_array(p[2]);
    (b - a).cross(c - a).normalize_or_zero().to_array()
}
