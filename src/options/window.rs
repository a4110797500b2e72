use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Initial window size and the range accepted for it.
pub struct WindowOptions {
    /// Initial width in pixels.
    pub width: u32,
    /// Initial height in pixels.
    pub height: u32,
    /// Smallest accepted width.
    pub min_width: u32,
    /// Smallest accepted height.
    pub min_height: u32,
    /// Largest accepted width.
    pub max_width: u32,
    /// Largest accepted height.
    pub max_height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            min_width: 300,
            min_height: 200,
            max_width: 7680,
            max_height: 4320,
        }
    }
}

impl WindowOptions {
    /// Check a requested size against the configured limits.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), ViewerError> {
        let width_ok = (self.min_width..=self.max_width).contains(&width);
        let height_ok = (self.min_height..=self.max_height).contains(&height);
        if width_ok && height_ok {
            Ok(())
        } else {
            log::warn!(
                "rejected window size {width}x{height} (limits {}x{} to {}x{})",
                self.min_width,
                self.min_height,
                self.max_width,
                self.max_height
            );
            Err(ViewerError::InvalidWindowSize { width, height })
        }
    }

    /// Adopt a requested size after validating it.
    pub fn set_size(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), ViewerError> {
        self.validate(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Initial size, clamped to the maximum.
    #[must_use]
    pub fn initial_size(&self) -> (u32, u32) {
        (
            self.width.min(self.max_width),
            self.height.min(self.max_height),
        )
    }
}
