//! vfb-input: Map host input events to the framebuffer device model's input protocol
//!
//! This crate provides [`InputDispatcher`], which translates host keyboard,
//! mouse, wheel and focus events into calls on an [`InputSink`], the device
//! model's key and button press entry points.

mod dispatch;
mod event;
mod keyboard;
mod modifiers;
mod mouse;
mod utf8;

pub use dispatch::{InputConfig, InputDispatcher};
pub use event::{HostEvent, HostKey, KeyEvent, KeyModifiers, SCANCODE_MASK};
pub use keyboard::{keysyms, map_host_key, resolve_keyval, translate_key, Keyval};
pub use modifiers::{AltKey, ModifierTracker};
pub use mouse::{buttons, wheel_clicks, PointerState};
pub use utf8::decode_codepoint;

/// The device model's input entry points.
pub trait InputSink {
    /// A key went down (`down == true`) or up.
    fn key_press(&mut self, down: bool, keyval: Keyval);

    /// Pointer report: `button > 0` is a press, `button < 0` the release of
    /// `-button`, and 0 a plain motion report.
    fn mouse_button_press(&mut self, button: i32, x: i32, y: i32);
}

/// A recorded call on an [`InputSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Key { keyval: Keyval, down: bool },
    Pointer { button: i32, x: i32, y: i32 },
}

/// Collecting sink, useful for tests and for deferring delivery.
impl InputSink for Vec<InputCommand> {
    fn key_press(&mut self, down: bool, keyval: Keyval) {
        self.push(InputCommand::Key { keyval, down });
    }

    fn mouse_button_press(&mut self, button: i32, x: i32, y: i32) {
        self.push(InputCommand::Pointer { button, x, y });
    }
}
