//! Axis-angle rotation applied through quaternion matrices.

use std::ops::Mul;

use super::matrix::Mat4;
use super::vec::{Vec3, Vec4};

/// A rotation stored as a unit axis and an angle in radians.
///
/// The product `q * v` is the quaternion sandwich `q v q̄`, evaluated as
/// `Q̄ · Q` on the homogeneous vector so it reuses the matrix kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    axis: Vec3,
    angle: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Zero rotation. The axis is irrelevant when the angle is zero.
    pub const IDENTITY: Self = Self {
        axis: Vec3::Y,
        angle: 0.0,
    };

    /// Rotation of `angle` radians about `axis`, stored verbatim.
    ///
    /// `axis` must be unit length for the rotation to be rigid.
    #[must_use]
    pub const fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }

    /// Rotation from the real part `cos(θ/2)` and imaginary part
    /// `sin(θ/2) · axis` of a unit quaternion.
    ///
    /// `scalar = ±1` divides by zero and yields a non-finite axis; use
    /// [`Quaternion::IDENTITY`] for the zero rotation.
    #[must_use]
    pub fn from_scalar_vector(scalar: f32, vector: Vec3) -> Self {
        let sin_half = (1.0 - scalar * scalar).sqrt();
        Self {
            axis: vector / sin_half,
            angle: 2.0 * scalar.acos(),
        }
    }

    /// Rotation axis.
    #[must_use]
    pub const fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Rotation angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// The rotation as a single matrix, `R = Q̄ · Q`.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        let (delta, gamma) = (self.angle / 2.0).sin_cos();
        let a = self.axis * delta;
        #[rustfmt::skip]
        let q_bar = Mat4::from_cols_array([
             gamma,  a.z,  -a.y,   a.x,
            -a.z,    gamma, a.x,   a.y,
             a.y,   -a.x,   gamma, a.z,
            -a.x,   -a.y,  -a.z,   gamma,
        ]);
        #[rustfmt::skip]
        let q = Mat4::from_cols_array([
             gamma,  a.z,  -a.y,  -a.x,
            -a.z,    gamma, a.x,  -a.y,
             a.y,   -a.x,   gamma, -a.z,
             a.x,    a.y,   a.z,   gamma,
        ]);
        q_bar * q
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        (self.to_matrix() * Vec4::from_direction(v)).xyz()
    }
}
