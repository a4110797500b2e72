//! Linear algebra kernel: vectors, points, 4x4 matrices and quaternions.
//!
//! These are small `Copy` value types with operator overloads. They convert
//! to and from the matching `glam` types so renderers can consume them
//! directly.

/// Column-major 4x4 matrices and inversion.
pub mod matrix;
/// Positions in 3D space.
pub mod point;
/// Axis-angle rotations.
pub mod quaternion;
/// Free 3D and homogeneous 4D vectors.
pub mod vec;

pub use matrix::Mat4;
pub use point::Point3;
pub use quaternion::Quaternion;
pub use vec::{Vec3, Vec4};

/// Tolerance for singular matrices and rays parallel to a slab.
pub const EPSILON: f32 = 1e-5;

/// Dot product of two vectors.
#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Cross product of two vectors.
#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}
