//! Input handling: event types, key actions, and the input processor
//! that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, ModifierKey, Modifiers, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
