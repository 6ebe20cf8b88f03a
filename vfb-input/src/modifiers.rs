//! Alt-key bookkeeping across focus changes.
//!
//! If the window loses focus while an Alt key is held (typically Alt-Tab) the
//! host never delivers the release, and the guest would see Alt stuck down.
//! The tracker remembers which Alt keys are down so the release can be
//! synthesized when focus goes away.

use crate::event::HostKey;
use crate::keyboard::{keysyms, Keyval};

/// One of the two tracked Alt keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AltKey {
    Left,
    Right,
}

impl AltKey {
    /// Keyval sent for this key, the same one its press was reported with.
    pub const fn keyval(self) -> Keyval {
        match self {
            AltKey::Left => keysyms::XK_Alt_L,
            AltKey::Right => keysyms::XK_Alt_R,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AltKey::Left => "left Alt",
            AltKey::Right => "right Alt",
        }
    }
}

/// Held state of the left and right Alt keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierTracker {
    left_alt: bool,
    right_alt: bool,
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. Keys other than the Alt keys are ignored.
    pub fn observe(&mut self, key: HostKey, pressed: bool) {
        match key {
            HostKey::RALT => self.right_alt = pressed,
            HostKey::LALT => self.left_alt = pressed,
            _ => {}
        }
    }

    pub fn is_held(&self, key: AltKey) -> bool {
        match key {
            AltKey::Left => self.left_alt,
            AltKey::Right => self.right_alt,
        }
    }

    /// Forget every held Alt key, returning the ones that need a synthesized
    /// release (right before left).
    pub fn focus_lost(&mut self) -> Vec<AltKey> {
        let mut released = Vec::new();
        if std::mem::take(&mut self.right_alt) {
            released.push(AltKey::Right);
        }
        if std::mem::take(&mut self.left_alt) {
            released.push(AltKey::Left);
        }
        released
    }
}
