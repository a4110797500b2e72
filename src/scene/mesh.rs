use crate::error::ViewerError;
use crate::math::{Point3, Vec3};

/// Indexed triangle mesh with per-vertex normals and colors and a
/// precomputed bounding sphere in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3>,
    faces: Vec<[u32; 3]>,
    normals: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    center: Point3,
    radius: f32,
}

/// One triangle's attributes, ready for submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Object-space corner positions.
    pub positions: [Point3; 3],
    /// Per-corner normals.
    pub normals: [Vec3; 3],
    /// Per-corner RGB colors.
    pub colors: [[f32; 3]; 3],
}

impl Mesh {
    /// Assemble a mesh whose bounding sphere the loader already computed.
    ///
    /// Fails when attribute counts disagree with the vertex count, a face
    /// references a missing vertex, or the radius is not a positive finite
    /// number.
    pub fn new(
        vertices: Vec<Point3>,
        faces: Vec<[u32; 3]>,
        normals: Vec<Vec3>,
        colors: Vec<[f32; 3]>,
        center: Point3,
        radius: f32,
    ) -> Result<Self, ViewerError> {
        let n = vertices.len();
        if normals.len() != n {
            return Err(ViewerError::InvalidMesh(format!(
                "{} normals for {n} vertices",
                normals.len()
            )));
        }
        if colors.len() != n {
            return Err(ViewerError::InvalidMesh(format!(
                "{} colors for {n} vertices",
                colors.len()
            )));
        }
        if let Some((i, face)) = faces
            .iter()
            .enumerate()
            .find(|(_, face)| face.iter().any(|&v| v as usize >= n))
        {
            return Err(ViewerError::InvalidMesh(format!(
                "face {i} {face:?} indexes past {n} vertices"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ViewerError::InvalidMesh(format!(
                "bounding radius {radius} is not positive"
            )));
        }
        Ok(Self {
            vertices,
            faces,
            normals,
            colors,
            center,
            radius,
        })
    }

    /// Assemble a mesh, deriving the bounding sphere from the vertices:
    /// the centroid, and the distance to the farthest vertex.
    pub fn from_geometry(
        vertices: Vec<Point3>,
        faces: Vec<[u32; 3]>,
        normals: Vec<Vec3>,
        colors: Vec<[f32; 3]>,
    ) -> Result<Self, ViewerError> {
        if vertices.is_empty() {
            return Err(ViewerError::InvalidMesh("no vertices".into()));
        }
        let sum = vertices
            .iter()
            .fold(Vec3::ZERO, |acc, &v| acc + Vec3::from(v));
        let center = Point3::ORIGIN + sum / vertices.len() as f32;
        let radius = vertices
            .iter()
            .map(|&v| (v - center).length())
            .fold(0.0f32, f32::max);
        Self::new(vertices, faces, normals, colors, center, radius)
    }

    /// Object-space vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangle vertex indices.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Per-vertex normals.
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Per-vertex RGB colors.
    #[must_use]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Positions flattened to `x, y, z` floats, ready for a vertex buffer.
    #[must_use]
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normals flattened to `x, y, z` floats.
    #[must_use]
    pub fn normal_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Object-space bounding sphere center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Object-space bounding sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Triangles with their per-corner attributes resolved.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|face| {
            let idx = face.map(|i| i as usize);
            Triangle {
                positions: idx.map(|i| self.vertices[i]),
                normals: idx.map(|i| self.normals[i]),
                colors: idx.map(|i| self.colors[i]),
            }
        })
    }
}

/// Supplies meshes by identifier (a file name, an asset key, ...).
pub trait MeshSource {
    /// Load the mesh known as `id`.
    fn load(&self, id: &str) -> Result<Mesh, ViewerError>;
}
