//! Procedural meshes for demos and tests.

use std::f32::consts::{PI, TAU};

use super::mesh::{Mesh, MeshSource};
use crate::error::ViewerError;
use crate::math::{Point3, Vec3};

/// Mesh source serving the built-in shapes `cube`, `octahedron` and
/// `sphere`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveSource;

impl MeshSource for PrimitiveSource {
    fn load(&self, id: &str) -> Result<Mesh, ViewerError> {
        match id {
            "cube" => cube(),
            "octahedron" => octahedron(),
            "sphere" => uv_sphere(16, 16),
            _ => Err(ViewerError::UnknownMesh(id.to_owned())),
        }
    }
}

/// Color a vertex by its normal, remapped into `[0, 1]`.
fn normal_color(n: Vec3) -> [f32; 3] {
    [0.5 + 0.5 * n.x, 0.5 + 0.5 * n.y, 0.5 + 0.5 * n.z]
}

/// Build a mesh whose vertices lie around the origin with radial normals.
fn radial_mesh(
    vertices: Vec<Point3>,
    faces: Vec<[u32; 3]>,
) -> Result<Mesh, ViewerError> {
    let normals: Vec<Vec3> = vertices
        .iter()
        .map(|&v| Vec3::from(v).normalize())
        .collect();
    let colors = normals.iter().map(|&n| normal_color(n)).collect();
    Mesh::from_geometry(vertices, faces, normals, colors)
}

/// Cube with side 2 centered on the origin.
pub fn cube() -> Result<Mesh, ViewerError> {
    let vertices = (0..8)
        .map(|i| {
            let coord = |bit: u32| if i & (1 << bit) == 0 { -1.0 } else { 1.0 };
            Point3::new(coord(0), coord(1), coord(2))
        })
        .collect();
    #[rustfmt::skip]
    let faces = vec![
        [0, 2, 3], [0, 3, 1], // -z
        [4, 5, 7], [4, 7, 6], // +z
        [0, 1, 5], [0, 5, 4], // -y
        [2, 6, 7], [2, 7, 3], // +y
        [0, 4, 6], [0, 6, 2], // -x
        [1, 3, 7], [1, 7, 5], // +x
    ];
    radial_mesh(vertices, faces)
}

/// Regular octahedron with unit circumradius.
pub fn octahedron() -> Result<Mesh, ViewerError> {
    let vertices = vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ];
    #[rustfmt::skip]
    let faces = vec![
        [0, 2, 4], [2, 1, 4], [1, 3, 4], [3, 0, 4],
        [2, 0, 5], [1, 2, 5], [3, 1, 5], [0, 3, 5],
    ];
    radial_mesh(vertices, faces)
}

/// Unit sphere tessellated into `stacks` latitude bands and `slices`
/// longitude segments.
pub fn uv_sphere(stacks: u32, slices: u32) -> Result<Mesh, ViewerError> {
    if stacks < 2 || slices < 3 {
        return Err(ViewerError::InvalidMesh(format!(
            "sphere needs at least 2 stacks and 3 slices, got {stacks}x{slices}"
        )));
    }
    let ring = |r: u32, j: u32| 1 + (r - 1) * slices + j % slices;
    let south = 1 + (stacks - 1) * slices;

    let mut vertices = Vec::with_capacity(south as usize + 1);
    vertices.push(Point3::new(0.0, 1.0, 0.0));
    for r in 1..stacks {
        let (sin_phi, cos_phi) = (PI * r as f32 / stacks as f32).sin_cos();
        for j in 0..slices {
            let theta = TAU * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            vertices.push(Point3::new(
                sin_phi * cos_theta,
                cos_phi,
                sin_phi * sin_theta,
            ));
        }
    }
    vertices.push(Point3::new(0.0, -1.0, 0.0));

    let mut faces = Vec::with_capacity((2 * slices * (stacks - 1)) as usize);
    for j in 0..slices {
        faces.push([0, ring(1, j + 1), ring(1, j)]);
        faces.push([ring(stacks - 1, j), ring(stacks - 1, j + 1), south]);
    }
    for r in 1..stacks - 1 {
        for j in 0..slices {
            let (a, b) = (ring(r, j), ring(r, j + 1));
            let (c, d) = (ring(r + 1, j), ring(r + 1, j + 1));
            faces.push([a, d, c]);
            faces.push([a, b, d]);
        }
    }
    radial_mesh(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_closed_and_centered() {
        let mesh = cube().unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert!(Vec3::from(mesh.center()).length() < 1e-6);
        assert!((mesh.radius() - 3f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn faces_wind_outward() {
        let meshes = [
            cube().unwrap(),
            octahedron().unwrap(),
            uv_sphere(6, 8).unwrap(),
        ];
        for t in meshes.iter().flat_map(Mesh::triangles) {
            let [a, b, c] = t.positions;
            let n = (b - a).cross(c - a);
            let centroid = Vec3::from(a) + Vec3::from(b) + Vec3::from(c);
            assert!(n.dot(centroid) > 0.0, "{t:?}");
        }
    }

    #[test]
    fn sphere_has_unit_radius() {
        let mesh = uv_sphere(8, 12).unwrap();
        assert!((mesh.radius() - 1.0).abs() < 1e-4);
        assert_eq!(mesh.vertex_count(), 2 + 7 * 12);
        assert_eq!(mesh.face_count(), 2 * 12 * 7);
    }

    #[test]
    fn source_resolves_names() {
        let source = PrimitiveSource;
        assert!(source.load("octahedron").is_ok());
        assert!(matches!(
            source.load("teapot"),
            Err(ViewerError::UnknownMesh(id)) if id == "teapot"
        ));
    }
}
