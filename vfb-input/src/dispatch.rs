//! Translation of host events into device model input calls.

use tracing::{debug, info, trace};

use crate::event::{HostEvent, KeyEvent};
use crate::keyboard::{self, Keyval};
use crate::modifiers::ModifierTracker;
use crate::mouse::{buttons, wheel_clicks, PointerState};
use crate::utf8;
use crate::InputSink;
use vfb_common::Point;

/// Input settings fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputConfig {
    /// Suppress all keyboard and mouse input; display output continues.
    pub view_only: bool,
}

/// Input dispatcher state: pointer position and held Alt keys, plus the
/// startup configuration.
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    config: InputConfig,
    pointer: PointerState,
    modifiers: ModifierTracker,
}

impl InputDispatcher {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pointer: PointerState::new(),
            modifiers: ModifierTracker::new(),
        }
    }

    pub fn config(&self) -> InputConfig {
        self.config
    }

    /// Last tracked pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer.pos()
    }

    pub fn modifiers(&self) -> &ModifierTracker {
        &self.modifiers
    }

    /// Handle one host event, calling into `sink` zero or more times.
    pub fn dispatch(&mut self, event: &HostEvent, sink: &mut dyn InputSink) {
        trace!(kind = event.kind(), "dispatching host event");
        match event {
            HostEvent::FocusLost => self.focus_lost(sink),
            HostEvent::Window => {}
            HostEvent::MouseWheel { dx, dy } => self.wheel(*dx, *dy, sink),
            HostEvent::MouseMotion { x, y } => self.motion(*x, *y, sink),
            HostEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => self.button(*button, *pressed, *x, *y, sink),
            HostEvent::Key(key) => self.key(key, sink),
            HostEvent::TextInput(text) => {
                // Characters arrive through key events; committed text is not injected.
                trace!(
                    codepoint = ?utf8::decode_codepoint(text.as_bytes()),
                    "text input not forwarded"
                );
            }
            HostEvent::Other(description) => {
                debug!("ignore host event: {}", description);
            }
        }
    }

    fn focus_lost(&mut self, sink: &mut dyn InputSink) {
        for alt in self.modifiers.focus_lost() {
            sink.key_press(false, alt.keyval());
            info!("released {} key", alt.name());
        }
    }

    fn wheel(&mut self, dx: i32, dy: i32, sink: &mut dyn InputSink) {
        if self.config.view_only {
            return;
        }
        let Point { x, y } = self.pointer.pos();
        let axes = [
            wheel_clicks(dy, buttons::WHEEL_UP, buttons::WHEEL_DOWN),
            wheel_clicks(dx, buttons::WHEEL_RIGHT, buttons::WHEEL_LEFT),
        ];
        for (button, clicks) in axes.into_iter().flatten() {
            for _ in 0..clicks {
                sink.mouse_button_press(button, x, y);
                sink.mouse_button_press(-button, x, y);
            }
        }
    }

    fn motion(&mut self, x: i32, y: i32, sink: &mut dyn InputSink) {
        if self.config.view_only {
            return;
        }
        self.pointer.set_pos(x, y);
        sink.mouse_button_press(buttons::NONE, x, y);
    }

    fn button(&mut self, button: u8, pressed: bool, x: i32, y: i32, sink: &mut dyn InputSink) {
        if self.config.view_only {
            return;
        }
        self.pointer.set_pos(x, y);
        let button = button as i32;
        let button = if pressed { button } else { -button };
        sink.mouse_button_press(button, x, y);
    }

    fn key(&mut self, event: &KeyEvent, sink: &mut dyn InputSink) {
        if self.config.view_only {
            return;
        }
        let keyval: Keyval = keyboard::resolve_keyval(event);
        trace!(
            sym = event.key.raw(),
            keyval,
            down = event.pressed,
            "key event"
        );
        sink.key_press(event.pressed, keyval);
        self.modifiers.observe(event.key, event.pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HostKey;
    use crate::InputCommand;

    #[test]
    fn test_mouse_move_generates_pointer() {
        let mut d = InputDispatcher::default();
        let mut out: Vec<InputCommand> = Vec::new();
        d.dispatch(&HostEvent::MouseMotion { x: 100, y: 200 }, &mut out);
        assert_eq!(
            out,
            vec![InputCommand::Pointer {
                button: 0,
                x: 100,
                y: 200
            }]
        );
        assert_eq!(d.pointer(), Point::new(100, 200));
    }

    #[test]
    fn test_button_release_is_negated() {
        let mut d = InputDispatcher::default();
        let mut out: Vec<InputCommand> = Vec::new();
        let release = HostEvent::MouseButton {
            button: 3,
            pressed: false,
            x: 1,
            y: 2,
        };
        d.dispatch(&release, &mut out);
        assert_eq!(
            out,
            vec![InputCommand::Pointer {
                button: -3,
                x: 1,
                y: 2
            }]
        );
    }

    #[test]
    fn test_alt_tracking_follows_key_events() {
        let mut d = InputDispatcher::default();
        let mut out: Vec<InputCommand> = Vec::new();
        d.dispatch(&HostEvent::Key(KeyEvent::down(HostKey::LALT)), &mut out);
        assert!(d.modifiers().is_held(crate::AltKey::Left));
        d.dispatch(&HostEvent::Key(KeyEvent::up(HostKey::LALT)), &mut out);
        assert!(!d.modifiers().is_held(crate::AltKey::Left));
    }

    #[test]
    fn test_ignored_events_produce_nothing() {
        let mut d = InputDispatcher::default();
        let mut out: Vec<InputCommand> = Vec::new();
        d.dispatch(&HostEvent::Window, &mut out);
        d.dispatch(&HostEvent::TextInput("é".into()), &mut out);
        d.dispatch(&HostEvent::Other("Quit".into()), &mut out);
        assert!(out.is_empty());
    }
}
