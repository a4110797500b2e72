//! Column-major 4x4 matrices.
//!
//! Storage follows the OpenGL convention: element `(row, col)` lives at
//! index `col * 4 + row`, so the translation of an affine transform sits in
//! elements 12..15. Every product returns a fresh value, so an output can
//! never alias one of its inputs.

use std::ops::Mul;

use super::point::Point3;
use super::vec::{Vec3, Vec4};
use super::EPSILON;

/// A 4x4 matrix stored column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// The all-zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Build from 16 column-major elements.
    #[must_use]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// The 16 column-major elements.
    #[must_use]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Element at `(row, col)`.
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Translation by `t`.
    #[must_use]
    pub const fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY.m;
        m[12] = t.x;
        m[13] = t.y;
        m[14] = t.z;
        Self { m }
    }

    /// Rotation of `degrees` about +Y, counter-clockwise looking down the
    /// axis toward the origin.
    #[must_use]
    pub fn from_rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let mut m = Self::IDENTITY.m;
        m[0] = c;
        m[2] = -s;
        m[8] = s;
        m[10] = c;
        Self { m }
    }

    /// Uniform scale.
    #[must_use]
    pub const fn from_scale(s: f32) -> Self {
        let mut m = Self::IDENTITY.m;
        m[0] = s;
        m[5] = s;
        m[10] = s;
        Self { m }
    }

    /// Transform a point with `w = 1` and drop the resulting `w`.
    ///
    /// Exact for affine matrices; use [`Mat4::project_point`] when the
    /// matrix carries a projection.
    #[must_use]
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let v = *self * Vec4::from_point(p);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a point with `w = 1` and divide by the resulting `w`.
    #[must_use]
    pub fn project_point(&self, p: Point3) -> Point3 {
        Point3::from(*self * Vec4::from_point(p))
    }

    /// Transform a direction (`w = 0`).
    #[must_use]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_direction(v)).xyz()
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        Self::determinant_from_minors(&s, &c)
    }

    /// Inverse by the adjugate method.
    ///
    /// Returns `None` when `|det| < EPSILON`.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let (s, c) = self.minors();
        let det = Self::determinant_from_minors(&s, &c);
        if det.abs() < EPSILON {
            return None;
        }
        let a = |r: usize, col: usize| self.get(r, col);
        let inv_det = 1.0 / det;

        // Adjugate, indexed (row, col).
        let b = [
            [
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ],
            [
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ],
            [
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ],
            [
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ],
        ];

        let mut m = [0.0; 16];
        for (row, cols) in b.iter().enumerate() {
            for (col, value) in cols.iter().enumerate() {
                m[col * 4 + row] = value * inv_det;
            }
        }
        Some(Self { m })
    }

    /// The 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = |r: usize, col: usize| self.get(r, col);
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }

    fn determinant_from_minors(s: &[f32; 6], c: &[f32; 6]) -> f32 {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut m = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                m[col * 4 + row] = (0..4)
                    .map(|k| self.get(row, k) * rhs.get(k, col))
                    .sum();
            }
        }
        Self { m }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(&m.m)
    }
}
