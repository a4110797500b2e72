use crate::math::{Point3, Vec3};

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The ray's endpoint.
    pub origin: Point3,
    /// Unit direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Ray starting at `near` and heading through `far`.
    ///
    /// Coincident points leave the direction non-finite.
    #[must_use]
    pub fn new(near: Point3, far: Point3) -> Self {
        Self {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}
