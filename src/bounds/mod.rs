//! Bounding volumes attached to models.
//!
//! A volume is rebuilt every frame from the model's mesh and its current
//! modelview and model transforms, then answers two questions: does a pick
//! ray hit it, and does it survive frustum culling. The box and the sphere
//! answer them differently; callers only see [`BoundingVolume`].

mod aabb;
mod sphere;

pub use aabb::AxisAlignedBoundingBox;
pub use sphere::BoundingSphere;

use serde::{Deserialize, Serialize};

use crate::math::{Mat4, Point3};
use crate::picking::Ray;
use crate::scene::Mesh;

/// Tessellation used for sphere overlays (slices and stacks).
pub const SPHERE_OVERLAY_DIVISIONS: u32 = 32;

/// Which bounding volume a model carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeKind {
    /// Axis-aligned box rebuilt in view space from every vertex.
    #[default]
    Box,
    /// Sphere from the mesh's precomputed centroid and radius.
    Sphere,
}

impl VolumeKind {
    /// Fresh, not yet computed volume of this kind.
    #[must_use]
    pub fn create(self) -> Box<dyn BoundingVolume> {
        match self {
            Self::Box => Box::new(AxisAlignedBoundingBox::default()),
            Self::Sphere => Box::new(BoundingSphere::default()),
        }
    }

    /// Lowercase name, as written in options files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
        }
    }
}

/// Geometry handed to the renderer to draw a volume.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Six quads in eye space, each wound counter-clockwise seen from
    /// outside the box.
    Box {
        /// Corner positions per face: back, front, left, right, bottom,
        /// top.
        faces: [[Point3; 4]; 6],
    },
    /// A tessellated sphere in eye space.
    Sphere {
        /// Eye-space center.
        center: Point3,
        /// Radius after model scaling.
        radius: f32,
        /// Longitude subdivisions.
        slices: u32,
        /// Latitude subdivisions.
        stacks: u32,
    },
}

/// A volume enclosing a model, rebuilt as the model and camera move.
///
/// Spaces follow the fixed-function convention: `modelview` maps object
/// space to eye space, `transform` maps object space to world space, and
/// pick rays arrive in world space.
pub trait BoundingVolume: std::fmt::Debug + Send + Sync {
    /// Rebuild the volume for the mesh under the given transforms.
    fn recalculate(&mut self, mesh: &Mesh, modelview: &Mat4, transform: &Mat4);

    /// World-space center of the volume.
    fn center(&self) -> Point3;

    /// Whether a world-space ray hits the volume.
    fn intersects(&self, ray: &Ray) -> bool;

    /// Whether the volume survives culling against `projection`.
    fn in_frustum(&self, projection: &Mat4) -> bool;

    /// Geometry for drawing the volume.
    fn overlay(&self) -> Overlay;

    /// Which implementation this is.
    fn kind(&self) -> VolumeKind;
}
