//! Viewer options with TOML preset support.
//!
//! Window limits, camera pose, animation rates, culling choices and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! viewer setup can be saved as a preset and reloaded.

mod animation;
mod camera;
mod culling;
mod keybindings;
mod window;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use culling::CullingOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size and limits.
    pub window: WindowOptions,
    /// Initial camera pose and projection.
    pub camera: CameraOptions,
    /// Model spin and bob.
    pub animation: AnimationOptions,
    /// Bounding volume and trackball settings.
    pub culling: CullingOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewerError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    let stem = path.file_stem().and_then(|s| s.to_str());
                    if let Some(stem) = stem {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
