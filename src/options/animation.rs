use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Spin and bob applied to every model.
pub struct AnimationOptions {
    /// Spin about the vertical axis, in degrees per second.
    pub rotation_speed: f32,
    /// Angular frequency of the vertical bob, in radians per second.
    pub bob_speed: f32,
    /// Peak vertical displacement of the bob.
    pub bob_amplitude: f32,
    /// Bounding radius every model is scaled to.
    pub target_radius: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            rotation_speed: 130.0,
            bob_speed: 2.5,
            bob_amplitude: 0.4,
            target_radius: 0.5,
        }
    }
}
