use super::{BoundingVolume, Overlay, VolumeKind, SPHERE_OVERLAY_DIVISIONS};
use crate::camera::Frustum;
use crate::math::{Mat4, Point3, Vec4};
use crate::picking::Ray;
use crate::scene::Mesh;

/// Sphere around a mesh, taken from the mesh's precomputed centroid and
/// radius and carried along by the model transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingSphere {
    center: Point3,
    radius: f32,
    eye_center: Point3,
}

impl BoundingSphere {
    /// Sphere at a world-space `center`, with view space taken equal to
    /// world space until the first recompute.
    #[must_use]
    pub fn new(center: Point3, radius: f32) -> Self {
        Self {
            center,
            radius,
            eye_center: center,
        }
    }

    /// Radius after model scaling.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Center in eye space, as of the last recompute.
    #[must_use]
    pub fn eye_center(&self) -> Point3 {
        self.eye_center
    }
}

impl BoundingVolume for BoundingSphere {
    fn recalculate(&mut self, mesh: &Mesh, modelview: &Mat4, transform: &Mat4) {
        // Uniform scale: the length of any basis column.
        let scale = (*transform * Vec4::new(1.0, 0.0, 0.0, 0.0)).xyz().length();
        self.center = transform.transform_point(mesh.center());
        self.eye_center = modelview.transform_point(mesh.center());
        self.radius = mesh.radius() * scale;
    }

    fn center(&self) -> Point3 {
        self.center
    }

    fn intersects(&self, ray: &Ray) -> bool {
        let l = self.center - ray.origin;
        let l2 = l.length_squared();
        let r2 = self.radius * self.radius;
        if l2 <= r2 {
            return true;
        }
        let s = l.dot(ray.direction);
        if s < 0.0 {
            return false;
        }
        l2 - s * s <= r2
    }

    fn in_frustum(&self, projection: &Mat4) -> bool {
        Frustum::from_clip_matrix(projection)
            .intersects_sphere(self.eye_center, self.radius)
    }

    fn overlay(&self) -> Overlay {
        Overlay::Sphere {
            center: self.eye_center,
            radius: self.radius,
            slices: SPHERE_OVERLAY_DIVISIONS,
            stacks: SPHERE_OVERLAY_DIVISIONS,
        }
    }

    fn kind(&self) -> VolumeKind {
        VolumeKind::Sphere
    }
}
