use serde::{Deserialize, Serialize};

use crate::bounds::VolumeKind;
use crate::input::ModifierKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Bounding volume selection and trackball activation.
pub struct CullingOptions {
    /// Volume attached to newly inserted models.
    pub volume_kind: VolumeKind,
    /// Modifier that turns a left click into a trackball drag instead of
    /// a pick.
    pub trackball_modifier: ModifierKey,
    /// Trackball radius as a fraction of the smaller viewport dimension.
    pub trackball_radius_fraction: f32,
}

impl Default for CullingOptions {
    fn default() -> Self {
        Self {
            volume_kind: VolumeKind::Box,
            trackball_modifier: ModifierKey::Shift,
            trackball_radius_fraction: 0.5,
        }
    }
}
