//! View frustum tests.
//!
//! Two flavours: a clip-space range check for individual points, and six
//! planes extracted from a projection matrix for sphere tests.

use crate::math::{Mat4, Point3, Vec3, Vec4};

/// Whether a clip-space point lies strictly inside the canonical view
/// volume (`-w < x, y, z < w`).
#[inline]
#[must_use]
pub fn in_clip_volume(clip: Vec4) -> bool {
    let w = clip.w;
    [clip.x, clip.y, clip.z].iter().all(|&c| -w < c && c < w)
}

/// Transform an eye-space point by `projection` and test it against the
/// clip volume.
#[must_use]
pub fn contains_eye_point(projection: &Mat4, p: Point3) -> bool {
    in_clip_volume(*projection * Vec4::from_point(p))
}

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(c: Vec4) -> Self {
        let len = c.xyz().length();
        if len > 0.0 {
            Self {
                normal: c.xyz() / len,
                distance: c.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Point3) -> f32 {
        self.normal.dot(point.into()) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a clip matrix (Gribb/Hartmann).
    ///
    /// The planes live in whatever space the matrix maps from: pass the
    /// bare projection for eye-space planes or `projection * view` for
    /// world-space planes. Assumes OpenGL `[-1, 1]` depth. Planes point
    /// inward.
    #[must_use]
    pub fn from_clip_matrix(m: &Mat4) -> Self {
        let row = |r: usize| {
            Vec4::new(m.get(r, 0), m.get(r, 1), m.get(r, 2), m.get(r, 3))
        };
        let (row0, row1, row2, row3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(row3 + row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Point3) -> bool {
        self.planes.iter().all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Point3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, Projection};

    fn projection() -> Mat4 {
        Projection {
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
        }
        .matrix()
    }

    #[test]
    fn identity_projection_clip_volume() {
        let id = Mat4::IDENTITY;
        assert!(contains_eye_point(&id, Point3::new(0.5, -0.5, 0.5)));
        assert!(!contains_eye_point(&id, Point3::new(1.0, 0.0, 0.0)));
        assert!(!contains_eye_point(&id, Point3::new(1000.0, 0.0, 0.0)));
    }

    #[test]
    fn test_frustum_contains_origin() {
        let camera =
            Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::ORIGIN, Vec3::Y);
        let vp = projection() * camera.view_matrix();
        let frustum = Frustum::from_clip_matrix(&vp);

        // Origin should be inside the frustum
        assert!(frustum.contains_point(Point3::ORIGIN));

        // Point far behind camera should be outside
        assert!(!frustum.contains_point(Point3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn test_sphere_intersection() {
        let frustum = Frustum::from_clip_matrix(&projection());

        // Eye-space sphere straight ahead should intersect
        assert!(frustum.intersects_sphere(Point3::new(0.0, 0.0, -10.0), 1.0));

        // Sphere behind the eye that doesn't reach the near plane
        assert!(!frustum.intersects_sphere(Point3::new(0.0, 0.0, 40.0), 1.0));

        // Sphere just beyond the far plane but overlapping it
        assert!(frustum.intersects_sphere(Point3::new(0.0, 0.0, -100.5), 1.0));
    }

    #[test]
    fn planes_agree_with_clip_test() {
        let proj = projection();
        let frustum = Frustum::from_clip_matrix(&proj);
        for p in [
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(3.0, 0.0, -5.0),
            Point3::new(0.0, -1.0, -2.0),
            Point3::new(0.0, 0.0, 5.0),
        ] {
            assert_eq!(
                frustum.contains_point(p),
                contains_eye_point(&proj, p),
                "{p:?}"
            );
        }
    }
}
