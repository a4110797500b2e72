use serde::{Deserialize, Serialize};

use crate::engine::command::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_all_volumes = "KeyB"
/// quit = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Show or hide every model's bounding volume at once.
    ToggleAllVolumes,
    /// Switch every model between box and sphere volumes.
    CycleVolumeKind,
    /// Put the camera back at its configured pose.
    ResetCamera,
    /// Print the key help.
    ShowHelp,
    /// Leave the viewer.
    Quit,
    /// Secondary quit key.
    Cancel,
}

impl KeyAction {
    /// Every action, in help-text order.
    pub const ALL: [Self; 6] = [
        Self::ToggleAllVolumes,
        Self::CycleVolumeKind,
        Self::ResetCamera,
        Self::ShowHelp,
        Self::Quit,
        Self::Cancel,
    ];

    /// The command this action issues.
    #[must_use]
    pub fn command(self) -> ViewerCommand {
        match self {
            Self::ToggleAllVolumes => ViewerCommand::ToggleAllVolumes,
            Self::CycleVolumeKind => ViewerCommand::CycleVolumeKind,
            Self::ResetCamera => ViewerCommand::ResetCamera,
            Self::ShowHelp => ViewerCommand::ShowHelp,
            Self::Quit | Self::Cancel => ViewerCommand::Quit,
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ToggleAllVolumes => "toggle rendering the bounding volumes",
            Self::CycleVolumeKind => {
                "switch between bounding boxes and spheres"
            }
            Self::ResetCamera => "reset the camera",
            Self::ShowHelp => "print this message again",
            Self::Quit | Self::Cancel => "quit",
        }
    }
}
