use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Initial camera pose and perspective projection parameters.
pub struct CameraOptions {
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// Look-at reference point in world space.
    pub reference: [f32; 3],
    /// Up direction (normalized on use).
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.5, 6.0],
            reference: [0.0, 1.5, 0.0],
            up: [0.0, 1.0, 0.0],
            fovy: 45.0,
            znear: 1.0,
            zfar: 25.0,
        }
    }
}
