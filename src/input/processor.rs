//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! modifier keys, whether a trackball drag is in progress) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the viewer's [`execute`](crate::Viewer::execute) method.

use super::event::{InputEvent, ModifierKey, Modifiers, MouseButton};
use crate::engine::command::ViewerCommand;
use crate::options::{KeybindingOptions, Options};

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// A left press with the trackball modifier held starts a trackball drag;
/// cursor motion then drags it until the button is released. A left press
/// without the modifier is a pick at the cursor.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     viewer.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: (f32, f32),
    /// Currently held modifiers.
    modifiers: Modifiers,
    /// Whether a trackball drag is in progress.
    tracking: bool,
    /// Modifier that selects trackball over picking.
    trackball_modifier: ModifierKey,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default bindings and shift as the trackball
    /// modifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&Options::default())
    }

    /// Create a processor using the configured bindings and modifier.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            modifiers: Modifiers::default(),
            tracking: false,
            trackball_modifier: options.culling.trackball_modifier,
            key_bindings: options.keybindings.clone(),
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.mouse_pos
    }

    /// Currently held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether a trackball drag is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(|action| action.command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(*x, *y)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(*button, *pressed)
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                None
            }
            InputEvent::KeyPressed { key } => self.handle_key_press(key),
            InputEvent::Resized { width, height } => {
                Some(ViewerCommand::Resize {
                    width: *width,
                    height: *height,
                })
            }
            InputEvent::Tick => Some(ViewerCommand::RequestRedraw),
        }
    }

    /// Cursor moved: remember it, and drag the trackball if one is active.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        self.mouse_pos = (x, y);
        self.tracking
            .then_some(ViewerCommand::DragTrackball { x, y })
    }

    /// Left press starts a drag or a pick; left release ends a drag.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != MouseButton::Left {
            return None;
        }
        let (x, y) = self.mouse_pos;

        if pressed {
            if self.modifiers.is_held(self.trackball_modifier) {
                self.tracking = true;
                return Some(ViewerCommand::BeginTrackball { x, y });
            }
            return Some(ViewerCommand::Pick { x, y });
        }

        // Release
        if std::mem::take(&mut self.tracking) {
            return Some(ViewerCommand::EndTrackball);
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, pressed: bool) -> Option<ViewerCommand> {
        p.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        })
    }

    fn shift(p: &mut InputProcessor, held: bool) {
        let _ = p.handle_event(&InputEvent::ModifiersChanged(Modifiers {
            shift: held,
            ..Modifiers::default()
        }));
    }

    #[test]
    fn plain_click_picks_at_cursor() {
        let mut p = InputProcessor::new();
        let moved = InputEvent::CursorMoved { x: 12.0, y: 34.0 };
        assert_eq!(p.handle_event(&moved), None);
        assert_eq!(
            press(&mut p, true),
            Some(ViewerCommand::Pick { x: 12.0, y: 34.0 })
        );
        assert_eq!(press(&mut p, false), None);
        assert!(!p.is_tracking());
    }

    #[test]
    fn modifier_click_drives_trackball() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(&InputEvent::CursorMoved { x: 1.0, y: 2.0 });
        shift(&mut p, true);
        assert_eq!(
            press(&mut p, true),
            Some(ViewerCommand::BeginTrackball { x: 1.0, y: 2.0 })
        );
        // Releasing the modifier mid-drag keeps the drag going.
        shift(&mut p, false);
        assert_eq!(
            p.handle_event(&InputEvent::CursorMoved { x: 5.0, y: 6.0 }),
            Some(ViewerCommand::DragTrackball { x: 5.0, y: 6.0 })
        );
        assert_eq!(press(&mut p, false), Some(ViewerCommand::EndTrackball));
        let moved = InputEvent::CursorMoved { x: 7.0, y: 8.0 };
        assert_eq!(p.handle_event(&moved), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut p = InputProcessor::new();
        let cmd = p.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(cmd, None);
    }

    #[test]
    fn configured_modifier_is_respected() {
        let mut options = Options::default();
        options.culling.trackball_modifier = ModifierKey::Ctrl;
        let mut p = InputProcessor::from_options(&options);
        shift(&mut p, true);
        assert!(matches!(
            press(&mut p, true),
            Some(ViewerCommand::Pick { .. })
        ));
        let _ = press(&mut p, false);
        let _ = p.handle_event(&InputEvent::ModifiersChanged(Modifiers {
            ctrl: true,
            ..Modifiers::default()
        }));
        assert!(matches!(
            press(&mut p, true),
            Some(ViewerCommand::BeginTrackball { .. })
        ));
    }

    #[test]
    fn keys_map_through_bindings() {
        let mut p = InputProcessor::new();
        let key = |k: &str| InputEvent::KeyPressed { key: k.into() };
        assert_eq!(
            p.handle_event(&key("KeyB")),
            Some(ViewerCommand::ToggleAllVolumes)
        );
        assert_eq!(p.handle_event(&key("Escape")), Some(ViewerCommand::Quit));
        assert_eq!(p.handle_event(&key("KeyQ")), Some(ViewerCommand::Quit));
        assert_eq!(p.handle_event(&key("KeyZ")), None);
    }

    #[test]
    fn resize_and_tick_pass_through() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(&InputEvent::Resized { width: 640, height: 480 }),
            Some(ViewerCommand::Resize { width: 640, height: 480 })
        );
        assert_eq!(
            p.handle_event(&InputEvent::Tick),
            Some(ViewerCommand::RequestRedraw)
        );
    }
}
