use super::{BoundingVolume, Overlay, VolumeKind};
use crate::camera::frustum::contains_eye_point;
use crate::math::{Mat4, Point3, Vec3, Vec4, EPSILON};
use crate::picking::Ray;
use crate::scene::Mesh;

/// Initial slab interval bound for ray tests.
const SLAB_LIMIT: f32 = 1e9;

/// Axis-aligned box fitted to a mesh in view space.
///
/// The extents are eye-space coordinates of the transformed vertices, so
/// the box stays axis-aligned on screen while the model spins underneath
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignedBoundingBox {
    /// Minimum x.
    pub left: f32,
    /// Maximum x.
    pub right: f32,
    /// Minimum y.
    pub bottom: f32,
    /// Maximum y.
    pub top: f32,
    /// Minimum z (farthest from the eye).
    pub back: f32,
    /// Maximum z (nearest to the eye).
    pub front: f32,
    modelview: Mat4,
    transform: Mat4,
}

impl Default for AxisAlignedBoundingBox {
    fn default() -> Self {
        Self::from_extents([0.0; 6])
    }
}

impl AxisAlignedBoundingBox {
    /// Returned by [`center`](BoundingVolume::center) when the stored
    /// modelview cannot be inverted. Far outside any sensible scene, so pick
    /// rays miss it.
    pub const INVALID_CENTER: Point3 =
        Point3::new(SLAB_LIMIT, SLAB_LIMIT, SLAB_LIMIT);

    /// Box with explicit extents `[left, right, bottom, top, back, front]`
    /// and identity matrices, so view space and world space coincide.
    #[must_use]
    pub fn from_extents(
        [left, right, bottom, top, back, front]: [f32; 6],
    ) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            back,
            front,
            modelview: Mat4::IDENTITY,
            transform: Mat4::IDENTITY,
        }
    }

    /// Modelview stored by the last recompute.
    #[must_use]
    pub fn modelview(&self) -> &Mat4 {
        &self.modelview
    }

    /// Model transform stored by the last recompute.
    #[must_use]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Half the box size along each axis.
    #[must_use]
    pub fn half_lengths(&self) -> Vec3 {
        Vec3::new(
            (self.right - self.left) / 2.0,
            (self.top - self.bottom) / 2.0,
            (self.front - self.back) / 2.0,
        )
    }

    /// View-space center of the extents.
    #[must_use]
    pub fn view_center(&self) -> Point3 {
        Point3::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
            (self.back + self.front) / 2.0,
        )
    }

    /// The six faces as quads in view space.
    #[must_use]
    pub fn faces(&self) -> [[Point3; 4]; 6] {
        let (l, r, b, t, k, f) = (
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.back,
            self.front,
        );
        let p = Point3::new;
        [
            [p(l, b, k), p(l, t, k), p(r, t, k), p(r, b, k)],
            [p(l, b, f), p(r, b, f), p(r, t, f), p(l, t, f)],
            [p(l, b, k), p(l, b, f), p(l, t, f), p(l, t, k)],
            [p(r, b, k), p(r, t, k), p(r, t, f), p(r, b, f)],
            [p(l, b, k), p(r, b, k), p(r, b, f), p(l, b, f)],
            [p(l, t, k), p(l, t, f), p(r, t, f), p(r, t, k)],
        ]
    }
}

impl BoundingVolume for AxisAlignedBoundingBox {
    fn recalculate(&mut self, mesh: &Mesh, modelview: &Mat4, transform: &Mat4) {
        self.modelview = *modelview;
        self.transform = *transform;

        let mut vertices = mesh
            .vertices()
            .iter()
            .map(|&v| (*modelview * Vec4::from_point(v)).xyz());
        let Some(first) = vertices.next() else {
            return;
        };
        (self.left, self.right) = (first.x, first.x);
        (self.bottom, self.top) = (first.y, first.y);
        (self.back, self.front) = (first.z, first.z);

        // Min is tested first; max only when the min test fails.
        for v in vertices {
            if v.x < self.left {
                self.left = v.x;
            } else if v.x > self.right {
                self.right = v.x;
            }
            if v.y < self.bottom {
                self.bottom = v.y;
            } else if v.y > self.top {
                self.top = v.y;
            }
            if v.z < self.back {
                self.back = v.z;
            } else if v.z > self.front {
                self.front = v.z;
            }
        }
    }

    fn center(&self) -> Point3 {
        match self.modelview.inverse() {
            Some(inverse) => self
                .transform
                .transform_point(inverse.transform_point(self.view_center())),
            None => Self::INVALID_CENTER,
        }
    }

    /// Slab test around the world-space center with the view-space half
    /// lengths.
    fn intersects(&self, ray: &Ray) -> bool {
        let p = (self.center() - ray.origin).to_array();
        let d = ray.direction.to_array();
        let h = self.half_lengths().to_array();
        let (mut t_min, mut t_max) = (-SLAB_LIMIT, SLAB_LIMIT);

        for i in 0..3 {
            let (e, f) = (p[i], d[i]);
            if f.abs() > EPSILON {
                let inv = 1.0 / f;
                let mut t1 = (e + h[i]) * inv;
                let mut t2 = (e - h[i]) * inv;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }
                t_min = t_min.max(t1);
                t_max = t_max.min(t2);
                if t_min > t_max || t_max < 0.0 {
                    return false;
                }
            } else if -e - h[i] > 0.0 || -e + h[i] < 0.0 {
                return false;
            }
        }
        true
    }

    /// Two front corners, both strictly inside clip space. Boxes that
    /// straddle a frustum edge can be misjudged; accepted.
    fn in_frustum(&self, projection: &Mat4) -> bool {
        let near_low = Point3::new(self.left, self.bottom, self.front);
        let near_high = Point3::new(self.right, self.top, self.front);
        contains_eye_point(projection, near_low)
            && contains_eye_point(projection, near_high)
    }

    fn overlay(&self) -> Overlay {
        Overlay::Box {
            faces: self.faces(),
        }
    }

    fn kind(&self) -> VolumeKind {
        VolumeKind::Box
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::primitives::cube;

    fn unit_cube() -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_extents([-1.0, 1.0, -1.0, 1.0, -1.0, 1.0])
    }

    #[test]
    fn ray_from_inside_hits() {
        let aabb = unit_cube();
        for dir in [Vec3::X, Vec3::Y, -Vec3::Z, Vec3::new(1.0, 2.0, 3.0)] {
            let ray = Ray {
                origin: Point3::new(0.2, -0.3, 0.5),
                direction: dir.normalize(),
            };
            assert!(aabb.intersects(&ray), "{dir:?}");
        }
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = Ray::new(
            Point3::new(10.0, 10.0, 10.0),
            Point3::new(11.0, 11.0, 11.0),
        );
        assert!(!unit_cube().intersects(&ray));
    }

    #[test]
    fn ray_toward_box_hits() {
        let ray = Ray::new(Point3::new(10.0, 10.0, 10.0), Point3::ORIGIN);
        assert!(unit_cube().intersects(&ray));
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let aabb = unit_cube();
        let outside =
            Ray::new(Point3::new(0.0, 2.0, 5.0), Point3::new(0.0, 2.0, -5.0));
        assert!(!aabb.intersects(&outside));
        let inside =
            Ray::new(Point3::new(0.0, 0.5, 5.0), Point3::new(0.0, 0.5, -5.0));
        assert!(aabb.intersects(&inside));
    }

    #[test]
    fn unit_box_in_identity_frustum() {
        let aabb = AxisAlignedBoundingBox::from_extents([
            -0.5, 0.5, -0.5, 0.5, -0.5, 0.5,
        ]);
        assert!(aabb.in_frustum(&Mat4::IDENTITY));

        let far = AxisAlignedBoundingBox::from_extents([
            999.5, 1000.5, -0.5, 0.5, -0.5, 0.5,
        ]);
        assert!(!far.in_frustum(&Mat4::IDENTITY));
    }

    #[test]
    fn only_front_corners_are_sampled() {
        // Back face pokes out of the clip volume, front face is inside.
        let aabb = AxisAlignedBoundingBox::from_extents([
            -0.5, 0.5, -0.5, 0.5, -5.0, 0.5,
        ]);
        assert!(aabb.in_frustum(&Mat4::IDENTITY));
    }

    #[test]
    fn recalculate_fits_transformed_vertices() {
        let mesh = cube().unwrap();
        let modelview = Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0))
            * Mat4::from_scale(0.5);
        let mut aabb = AxisAlignedBoundingBox::default();
        aabb.recalculate(&mesh, &modelview, &Mat4::IDENTITY);

        let expected = [-0.5, 0.5, -0.5, 0.5, -10.5, -9.5];
        let got = [
            aabb.left,
            aabb.right,
            aabb.bottom,
            aabb.top,
            aabb.back,
            aabb.front,
        ];
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-6, "{got:?}");
        }
        assert!(aabb.left <= aabb.right);
        assert!(aabb.bottom <= aabb.top);
        assert!(aabb.back <= aabb.front);
        assert_eq!(aabb.modelview(), &modelview);
    }

    #[test]
    fn center_undoes_camera_and_applies_model_transform() {
        let mesh = cube().unwrap();
        let transform = Mat4::from_translation(Vec3::new(2.0, 1.0, -1.0));
        let view = Mat4::from_translation(Vec3::new(0.0, -1.5, -6.0));
        let mut aabb = AxisAlignedBoundingBox::default();
        aabb.recalculate(&mesh, &(view * transform), &transform);

        let c = aabb.center();
        // Object-space center is the origin; the model transform moves it.
        assert!((c - Point3::new(2.0, 1.0, -1.0)).length() < 1e-5, "{c:?}");
    }

    #[test]
    fn singular_modelview_yields_sentinel_center() {
        let mesh = cube().unwrap();
        let mut aabb = AxisAlignedBoundingBox::default();
        aabb.recalculate(&mesh, &Mat4::from_scale(0.01), &Mat4::IDENTITY);
        assert_eq!(aabb.center(), AxisAlignedBoundingBox::INVALID_CENTER);

        let ray = Ray::new(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0));
        assert!(!aabb.intersects(&ray));
    }

    #[test]
    fn faces_wind_outward() {
        let aabb = AxisAlignedBoundingBox::from_extents([
            -1.0, 2.0, -3.0, 4.0, -5.0, 6.0,
        ]);
        let center = Vec3::from(aabb.view_center());
        for quad in aabb.faces() {
            let n = (quad[1] - quad[0]).cross(quad[2] - quad[0]);
            let mid = (Vec3::from(quad[0]) + Vec3::from(quad[2])) / 2.0;
            assert!(n.dot(mid - center) > 0.0, "{quad:?}");
        }
    }
}
