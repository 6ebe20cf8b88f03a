//! Host input events as seen by the adapter.
//!
//! Host backends convert their native events into [`HostEvent`] so the
//! dispatch logic can be exercised without a window system. Key symbols keep
//! the host's own numbering ([`HostKey`]); printable keys are their ASCII
//! value and named keys carry the scancode bit.

use bitflags::bitflags;

/// Bit set on key symbols that have no character representation.
pub const SCANCODE_MASK: i32 = 1 << 30;

const fn named(scancode: i32) -> HostKey {
    HostKey(scancode | SCANCODE_MASK)
}

/// A host key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostKey(pub i32);

impl HostKey {
    pub const UNKNOWN: Self = Self(0);

    // Character keys
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0d);
    pub const ESCAPE: Self = Self(0x1b);
    pub const SPACE: Self = Self(0x20);
    pub const DELETE: Self = Self(0x7f);

    // Function keys
    pub const F1: Self = named(58);
    pub const F2: Self = named(59);
    pub const F3: Self = named(60);
    pub const F4: Self = named(61);
    pub const F5: Self = named(62);
    pub const F6: Self = named(63);
    pub const F7: Self = named(64);
    pub const F8: Self = named(65);
    pub const F9: Self = named(66);
    pub const F10: Self = named(67);
    pub const F11: Self = named(68);
    pub const F12: Self = named(69);
    pub const F13: Self = named(104);
    pub const F14: Self = named(105);
    pub const F15: Self = named(106);

    // Lock and system keys
    pub const CAPSLOCK: Self = named(57);
    pub const PRINTSCREEN: Self = named(70);
    pub const SCROLLLOCK: Self = named(71);
    pub const PAUSE: Self = named(72);
    pub const NUMLOCKCLEAR: Self = named(83);
    pub const HELP: Self = named(117);
    pub const SYSREQ: Self = named(154);
    pub const CLEAR: Self = named(156);
    pub const MODE: Self = named(257);

    // Navigation
    pub const INSERT: Self = named(73);
    pub const HOME: Self = named(74);
    pub const PAGEUP: Self = named(75);
    pub const END: Self = named(77);
    pub const PAGEDOWN: Self = named(78);
    pub const RIGHT: Self = named(79);
    pub const LEFT: Self = named(80);
    pub const DOWN: Self = named(81);
    pub const UP: Self = named(82);

    // Keypad
    pub const KP_DIVIDE: Self = named(84);
    pub const KP_MULTIPLY: Self = named(85);
    pub const KP_MINUS: Self = named(86);
    pub const KP_PLUS: Self = named(87);
    pub const KP_ENTER: Self = named(88);
    pub const KP_1: Self = named(89);
    pub const KP_2: Self = named(90);
    pub const KP_3: Self = named(91);
    pub const KP_4: Self = named(92);
    pub const KP_5: Self = named(93);
    pub const KP_6: Self = named(94);
    pub const KP_7: Self = named(95);
    pub const KP_8: Self = named(96);
    pub const KP_9: Self = named(97);
    pub const KP_0: Self = named(98);
    pub const KP_PERIOD: Self = named(99);
    pub const KP_EQUALS: Self = named(103);

    // Modifiers
    pub const LCTRL: Self = named(224);
    pub const LSHIFT: Self = named(225);
    pub const LALT: Self = named(226);
    pub const LGUI: Self = named(227);
    pub const RCTRL: Self = named(228);
    pub const RSHIFT: Self = named(229);
    pub const RALT: Self = named(230);
    pub const RGUI: Self = named(231);

    /// Key symbol for a printable ASCII character.
    pub const fn ascii(c: u8) -> Self {
        Self(c as i32)
    }

    /// Raw symbol value.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

bitflags! {
    /// Modifier state reported with a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL  = 0x0040;
        const RCTRL  = 0x0080;
        const LALT   = 0x0100;
        const RALT   = 0x0200;
        const LGUI   = 0x0400;
        const RGUI   = 0x0800;
        const NUM    = 0x1000;
        const CAPS   = 0x2000;
        const MODE   = 0x4000;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL  = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT   = Self::LALT.bits() | Self::RALT.bits();
        const GUI   = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: HostKey,
    pub modifiers: KeyModifiers,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn new(key: HostKey, modifiers: KeyModifiers, pressed: bool) -> Self {
        Self {
            key,
            modifiers,
            pressed,
        }
    }

    pub const fn down(key: HostKey) -> Self {
        Self::new(key, KeyModifiers::empty(), true)
    }

    pub const fn up(key: HostKey) -> Self {
        Self::new(key, KeyModifiers::empty(), false)
    }
}

/// One event polled from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The window lost keyboard focus.
    FocusLost,
    /// Any other window notification (shown, moved, resized by the user...).
    Window,
    /// Wheel motion in discrete units; positive `dy` is away from the user,
    /// positive `dx` is to the right.
    MouseWheel { dx: i32, dy: i32 },
    MouseMotion { x: i32, y: i32 },
    /// Button numbers follow the host convention: 1 left, 2 middle, 3 right.
    MouseButton {
        button: u8,
        pressed: bool,
        x: i32,
        y: i32,
    },
    Key(KeyEvent),
    /// Committed text (UTF-8).
    TextInput(String),
    /// An event kind the adapter does not handle, with a description for logs.
    Other(String),
}

impl HostEvent {
    /// Short category name used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::FocusLost => "focus-lost",
            HostEvent::Window => "window",
            HostEvent::MouseWheel { .. } => "mouse-wheel",
            HostEvent::MouseMotion { .. } => "mouse-motion",
            HostEvent::MouseButton { .. } => "mouse-button",
            HostEvent::Key(_) => "key",
            HostEvent::TextInput(_) => "text-input",
            HostEvent::Other(_) => "other",
        }
    }
}
