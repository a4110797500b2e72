//! Virtual trackball mapping pointer drags to rotations.
//!
//! Window points are lifted onto a sphere of the trackball's radius near
//! the center and onto a hyperbolic sheet further out, so dragging past
//! the sphere's rim still produces a smooth rotation.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::math::{Point3, Quaternion, Vec3};

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackballState {
    /// Not tracking.
    #[default]
    Off,
    /// Tracking a drag.
    On,
}

/// Shoemake-style virtual trackball.
#[derive(Debug, Clone, Default)]
pub struct Trackball {
    center_x: i32,
    center_y: i32,
    radius: f32,
    point1: Point3,
    point2: Point3,
    state: TrackballState,
}

impl Trackball {
    /// Trackball centered at `(cx, cy)` in window pixels.
    #[must_use]
    pub fn new(center_x: i32, center_y: i32, radius: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            ..Self::default()
        }
    }

    /// Move the trackball's center.
    pub fn set_center(&mut self, x: i32, y: i32) {
        self.center_x = x;
        self.center_y = y;
    }

    /// Change the trackball's radius.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Trackball radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current on/off state.
    #[must_use]
    pub fn state(&self) -> TrackballState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == TrackballState::On
    }

    /// Start point of the current increment.
    #[must_use]
    pub fn point1(&self) -> Point3 {
        self.point1
    }

    /// End point of the current increment.
    #[must_use]
    pub fn point2(&self) -> Point3 {
        self.point2
    }

    /// Start tracking at a window position. Both sample points land on the
    /// same spot, so the first rotation is zero.
    pub fn begin(&mut self, x: f32, y: f32) {
        let p = self.project_to_sphere(x, y);
        self.point1 = p;
        self.point2 = p;
        self.state = TrackballState::On;
        log::debug!("trackball on at ({x}, {y})");
    }

    /// Record the latest pointer position as the increment's end point.
    pub fn drag(&mut self, x: f32, y: f32) {
        self.point2 = self.project_to_sphere(x, y);
    }

    /// Close the current increment: the end point becomes the next start.
    pub fn advance(&mut self) {
        self.point1 = self.point2;
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.state = TrackballState::Off;
        log::debug!("trackball off");
    }

    /// Rotation carrying `point1` to `point2` about the trackball center.
    ///
    /// Points that coincide in x and y give the identity.
    #[must_use]
    pub fn rotation(&self) -> Quaternion {
        let (p1, p2) = (self.point1, self.point2);
        if p1.x == p2.x && p1.y == p2.y {
            return Quaternion::IDENTITY;
        }

        let a = Vec3::from(p1).normalize();
        let b = Vec3::from(p2).normalize();
        let axis = a.cross(b).normalize();

        // Chords longer than the diameter come from the hyperbolic sheet.
        let distance =
            ((p2 - p1).length() / (2.0 * self.radius)).clamp(0.0, 1.0);
        let angle = 2.0 * distance.asin();

        Quaternion::from_axis_angle(axis, angle)
    }

    /// Lift a window position onto the sphere or the hyperbolic sheet.
    #[must_use]
    pub fn project_to_sphere(&self, x: f32, y: f32) -> Point3 {
        let x = x - self.center_x as f32;
        let y = y - self.center_y as f32;
        let d = x.hypot(y);
        let t = self.radius * FRAC_1_SQRT_2;

        let z = if d < t {
            -(self.radius * self.radius - d * d).sqrt()
        } else {
            -(t * t / d)
        };
        Point3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn trackball() -> Trackball {
        Trackball::new(400, 300, 100.0)
    }

    #[test]
    fn begin_seeds_both_points() {
        let mut tb = trackball();
        tb.begin(420.0, 310.0);
        assert!(tb.is_active());
        assert_eq!(tb.point1(), tb.point2());
        assert_eq!(tb.rotation(), Quaternion::IDENTITY);
        tb.end();
        assert_eq!(tb.state(), TrackballState::Off);
    }

    #[test]
    fn coincident_points_give_zero_angle() {
        let tb = trackball();
        assert_eq!(tb.rotation().angle(), 0.0);
    }

    #[test]
    fn full_diameter_drag_is_half_turn() {
        let mut tb = trackball();
        tb.begin(300.0, 300.0);
        tb.drag(500.0, 300.0);
        assert!((tb.rotation().angle() - PI).abs() < 1e-5);
    }

    #[test]
    fn long_drag_is_clamped() {
        let mut tb = trackball();
        tb.begin(0.0, 0.0);
        tb.drag(800.0, 600.0);
        let angle = tb.rotation().angle();
        assert!(angle.is_finite());
        assert!((angle - PI).abs() < 1e-5);
    }

    #[test]
    fn center_projects_to_bottom_of_sphere() {
        let p = trackball().project_to_sphere(400.0, 300.0);
        assert_eq!(p, Point3::new(0.0, 0.0, -100.0));
    }

    #[test]
    fn projection_is_continuous_at_the_seam() {
        let tb = trackball();
        let t = 100.0 * FRAC_1_SQRT_2;
        let inside = tb.project_to_sphere(400.0 + t - 1e-3, 300.0);
        let outside = tb.project_to_sphere(400.0 + t + 1e-3, 300.0);
        assert!((inside.z - outside.z).abs() < 1e-2);
    }

    #[test]
    fn horizontal_drag_rotates_about_vertical_axis() {
        let mut tb = trackball();
        tb.begin(400.0, 300.0);
        tb.drag(410.0, 300.0);
        let q = tb.rotation();
        assert!(q.axis().x.abs() < 1e-5 && q.axis().z.abs() < 1e-5);
        assert!(q.angle() > 0.0 && q.angle() < 0.2);
    }

    #[test]
    fn advance_consumes_the_increment() {
        let mut tb = trackball();
        tb.begin(400.0, 300.0);
        tb.drag(420.0, 330.0);
        tb.advance();
        assert_eq!(tb.rotation(), Quaternion::IDENTITY);
    }
}
