use serde::{Deserialize, Serialize};

use crate::math::{Mat4, Point3, Quaternion, Vec3};
use crate::options::CameraOptions;

/// First-person camera defined by a fixed eye, a look-at reference point
/// and an up vector.
///
/// Gaze and right vectors are derived on demand. Rotation never moves the
/// eye and never introduces roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Point3,
    /// Look-at reference point.
    pub reference: Point3,
    /// Up direction, kept unit length.
    pub up: Vec3,
}

impl Camera {
    /// Create a camera; `up` is normalized.
    #[must_use]
    pub fn new(eye: Point3, reference: Point3, up: Vec3) -> Self {
        Self {
            eye,
            reference,
            up: up.normalize(),
        }
    }

    /// Build the camera pose described by the options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self::new(
            options.eye.into(),
            options.reference.into(),
            options.up.into(),
        )
    }

    /// Unit vector from the eye toward the reference point.
    #[must_use]
    pub fn gaze(&self) -> Vec3 {
        (self.reference - self.eye).normalize()
    }

    /// Unit vector pointing to the camera's right (`gaze × up`).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.gaze().cross(self.up).normalize()
    }

    /// Turn the camera in place by `q`.
    ///
    /// The right vector has its vertical component removed after rotation
    /// and before `up` is rebuilt, so the horizon stays level.
    pub fn rotate(&mut self, q: Quaternion) {
        let right = self.right();

        let gaze = (q * self.gaze()).normalize();
        self.reference = self.eye + gaze;

        let mut right = q * right;
        right.y = 0.0;
        let right = right.normalize();

        self.up = right.cross(gaze).normalize();
    }

    /// Right-handed world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        glam::Mat4::look_at_rh(
            self.eye.into(),
            self.reference.into(),
            self.up.into(),
        )
        .into()
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection from the camera options at the given aspect ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            fovy: options.fovy,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio after a resize. A zero height is treated as
    /// one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Eye-to-clip matrix with OpenGL `[-1, 1]` depth.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        glam::Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn default_camera() -> Camera {
        Camera::new(
            Point3::new(0.0, 1.5, 6.0),
            Point3::new(0.0, 1.5, 0.0),
            Vec3::Y,
        )
    }

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn derived_vectors() {
        let camera = default_camera();
        assert_vec_near(camera.gaze(), -Vec3::Z);
        assert_vec_near(camera.right(), Vec3::X);
    }

    #[test]
    fn yaw_turns_gaze_and_keeps_eye() {
        let mut camera = default_camera();
        camera.rotate(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2));
        assert_eq!(camera.eye, Point3::new(0.0, 1.5, 6.0));
        assert_vec_near(camera.gaze(), -Vec3::X);
        assert_vec_near(camera.up, Vec3::Y);
        assert_vec_near(camera.reference - camera.eye, -Vec3::X);
    }

    #[test]
    fn rotation_about_gaze_is_discarded() {
        let mut camera = default_camera();
        for _ in 0..20 {
            camera.rotate(Quaternion::from_axis_angle(Vec3::Z, 0.1));
            assert_vec_near(camera.gaze(), -Vec3::Z);
            assert_vec_near(camera.up, Vec3::Y);
        }
    }

    #[test]
    fn up_stays_unit_and_orthogonal_to_gaze() {
        let mut camera = default_camera();
        let axis = Vec3::new(0.3, 0.2, 1.0).normalize();
        for _ in 0..20 {
            camera.rotate(Quaternion::from_axis_angle(axis, 0.1));
            assert!((camera.up.length() - 1.0).abs() < 1e-5);
            assert!(camera.up.dot(camera.gaze()).abs() < 1e-4);
            assert!(camera.up.y > 0.0);
        }
    }

    #[test]
    fn identity_rotation_is_a_no_op() {
        let mut camera = default_camera();
        camera.rotate(Quaternion::IDENTITY);
        assert_vec_near(camera.gaze(), -Vec3::Z);
        assert_vec_near(camera.up, Vec3::Y);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = default_camera();
        let p = camera.view_matrix().transform_point(camera.eye);
        assert!(Vec3::from(p).length() < 1e-5);
        let r = camera.view_matrix().transform_point(camera.reference);
        assert_vec_near(Vec3::from(r), Vec3::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn resize_guards_zero_height() {
        let mut projection = Projection {
            fovy: 45.0,
            aspect: 1.0,
            znear: 1.0,
            zfar: 25.0,
        };
        projection.resize(800, 0);
        assert_eq!(projection.aspect, 800.0);
        projection.resize(1280, 720);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
