use crate::math::{Mat4, Point3, Vec4};
use crate::picking::Ray;

/// Window-space rectangle the projection maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels.
    pub x: i32,
    /// Bottom edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a whole window.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Center of the viewport in window pixels (origin top-left).
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// Map a window point at normalized `depth` (0 = near, 1 = far) back
    /// to world space.
    ///
    /// `window_y` counts up from the bottom edge. Returns `None` when
    /// `projection * view` is singular or the point maps to infinity.
    #[must_use]
    pub fn unproject(
        &self,
        window_x: f32,
        window_y: f32,
        depth: f32,
        view: &Mat4,
        projection: &Mat4,
    ) -> Option<Point3> {
        let inverse = (*projection * *view).inverse()?;
        let ndc = Vec4::new(
            2.0 * (window_x - self.x as f32) / self.width as f32 - 1.0,
            2.0 * (window_y - self.y as f32) / self.height as f32 - 1.0,
            2.0 * depth - 1.0,
            1.0,
        );
        let world = inverse * ndc;
        if world.w == 0.0 {
            return None;
        }
        Some(Point3::from(world))
    }

    /// Ray from the near plane to the far plane through a pointer position.
    ///
    /// `mouse_y` counts down from the top edge, as window systems report
    /// it.
    #[must_use]
    pub fn pick_ray(
        &self,
        mouse_x: f32,
        mouse_y: f32,
        view: &Mat4,
        projection: &Mat4,
    ) -> Option<Ray> {
        let window_y = self.height as f32 - mouse_y - 1.0;
        let near = self.unproject(mouse_x, window_y, 0.0, view, projection)?;
        let far = self.unproject(mouse_x, window_y, 1.0, view, projection)?;
        Some(Ray::new(near, far))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, Projection};
    use crate::math::Vec3;

    fn setup() -> (Viewport, Mat4, Mat4) {
        let camera = Camera::new(
            Point3::new(0.0, 1.5, 6.0),
            Point3::new(0.0, 1.5, 0.0),
            Vec3::Y,
        );
        let projection = Projection {
            fovy: 45.0,
            aspect: 800.0 / 600.0,
            znear: 1.0,
            zfar: 25.0,
        };
        (
            Viewport::new(800, 600),
            camera.view_matrix(),
            projection.matrix(),
        )
    }

    #[test]
    fn center_pixel_unprojects_onto_view_axis() {
        let (viewport, view, projection) = setup();
        let near = viewport
            .unproject(400.0, 300.0, 0.0, &view, &projection)
            .unwrap();
        let far = viewport
            .unproject(400.0, 300.0, 1.0, &view, &projection)
            .unwrap();
        assert!((near.z - 5.0).abs() < 1e-3, "{near:?}");
        assert!((far.z - -19.0).abs() < 1e-2, "{far:?}");
        assert!(near.x.abs() < 1e-4 && (near.y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn pick_ray_points_into_the_scene() {
        let (viewport, view, projection) = setup();
        let ray = viewport.pick_ray(400.0, 299.0, &view, &projection).unwrap();
        assert!((ray.direction - -Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn singular_matrices_yield_none() {
        let (viewport, view, _) = setup();
        assert!(viewport.pick_ray(1.0, 1.0, &view, &Mat4::ZERO).is_none());
    }

    #[test]
    fn center_of_viewport() {
        assert_eq!(Viewport::new(1280, 720).center(), (640, 360));
    }
}
