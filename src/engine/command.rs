//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as a `ViewerCommand`.
//! Consumers construct commands and pass them to
//! [`Viewer::execute`](super::Viewer::execute).

/// A discrete viewer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Trackball ───────────────────────────────────────────────────
    /// Start a trackball drag at a window position.
    BeginTrackball {
        /// Horizontal window coordinate.
        x: f32,
        /// Vertical window coordinate, downward from the top.
        y: f32,
    },

    /// Move the trackball's second sample point.
    DragTrackball {
        /// Horizontal window coordinate.
        x: f32,
        /// Vertical window coordinate, downward from the top.
        y: f32,
    },

    /// Finish the trackball drag.
    EndTrackball,

    /// Put the camera back at its configured pose.
    ResetCamera,

    // ── Picking & volumes ───────────────────────────────────────────
    /// Cast a ray through a window position and toggle the first model hit.
    Pick {
        /// Horizontal window coordinate.
        x: f32,
        /// Vertical window coordinate, downward from the top.
        y: f32,
    },

    /// Flip the scene-wide bounding volume overlay switch.
    ToggleAllVolumes,

    /// Switch every model between box and sphere volumes.
    CycleVolumeKind,

    // ── Window & lifecycle ──────────────────────────────────────────
    /// The window changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },

    /// A redraw tick arrived.
    RequestRedraw,

    /// Print the key help.
    ShowHelp,

    /// Leave the viewer.
    Quit,
}
