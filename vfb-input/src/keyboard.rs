use crate::event::{HostKey, KeyEvent, KeyModifiers};

/// Device model key identifier (X11 keysym numbering).
pub type Keyval = u32;

/// X11 keysym values
#[allow(non_upper_case_globals)]
pub mod keysyms {
    use super::Keyval;

    pub const XK_BackSpace: Keyval = 0xff08;
    pub const XK_Tab: Keyval = 0xff09;
    pub const XK_Clear: Keyval = 0xff0b;
    pub const XK_Return: Keyval = 0xff0d;
    pub const XK_Pause: Keyval = 0xff13;
    pub const XK_Scroll_Lock: Keyval = 0xff14;
    pub const XK_Sys_Req: Keyval = 0xff15;
    pub const XK_Escape: Keyval = 0xff1b;
    pub const XK_Delete: Keyval = 0xffff;

    pub const XK_Home: Keyval = 0xff50;
    pub const XK_Left: Keyval = 0xff51;
    pub const XK_Up: Keyval = 0xff52;
    pub const XK_Right: Keyval = 0xff53;
    pub const XK_Down: Keyval = 0xff54;
    pub const XK_Page_Up: Keyval = 0xff55;
    pub const XK_Page_Down: Keyval = 0xff56;
    pub const XK_End: Keyval = 0xff57;

    pub const XK_Print: Keyval = 0xff61;
    pub const XK_Insert: Keyval = 0xff63;
    pub const XK_Help: Keyval = 0xff6a;
    pub const XK_Mode_switch: Keyval = 0xff7e;
    pub const XK_Num_Lock: Keyval = 0xff7f;

    pub const XK_KP_Enter: Keyval = 0xff8d;
    pub const XK_KP_Multiply: Keyval = 0xffaa;
    pub const XK_KP_Add: Keyval = 0xffab;
    pub const XK_KP_Subtract: Keyval = 0xffad;
    pub const XK_KP_Decimal: Keyval = 0xffae;
    pub const XK_KP_Divide: Keyval = 0xffaf;
    pub const XK_KP_0: Keyval = 0xffb0;
    pub const XK_KP_1: Keyval = 0xffb1;
    pub const XK_KP_2: Keyval = 0xffb2;
    pub const XK_KP_3: Keyval = 0xffb3;
    pub const XK_KP_4: Keyval = 0xffb4;
    pub const XK_KP_5: Keyval = 0xffb5;
    pub const XK_KP_6: Keyval = 0xffb6;
    pub const XK_KP_7: Keyval = 0xffb7;
    pub const XK_KP_8: Keyval = 0xffb8;
    pub const XK_KP_9: Keyval = 0xffb9;
    pub const XK_KP_Equal: Keyval = 0xffbd;

    pub const XK_F1: Keyval = 0xffbe;
    pub const XK_F2: Keyval = 0xffbf;
    pub const XK_F3: Keyval = 0xffc0;
    pub const XK_F4: Keyval = 0xffc1;
    pub const XK_F5: Keyval = 0xffc2;
    pub const XK_F6: Keyval = 0xffc3;
    pub const XK_F7: Keyval = 0xffc4;
    pub const XK_F8: Keyval = 0xffc5;
    pub const XK_F9: Keyval = 0xffc6;
    pub const XK_F10: Keyval = 0xffc7;
    pub const XK_F11: Keyval = 0xffc8;
    pub const XK_F12: Keyval = 0xffc9;
    pub const XK_F13: Keyval = 0xffca;
    pub const XK_F14: Keyval = 0xffcb;
    pub const XK_F15: Keyval = 0xffcc;

    pub const XK_Shift_L: Keyval = 0xffe1;
    pub const XK_Shift_R: Keyval = 0xffe2;
    pub const XK_Control_L: Keyval = 0xffe3;
    pub const XK_Control_R: Keyval = 0xffe4;
    pub const XK_Caps_Lock: Keyval = 0xffe5;
    pub const XK_Alt_L: Keyval = 0xffe9;
    pub const XK_Alt_R: Keyval = 0xffea;
    pub const XK_Super_L: Keyval = 0xffeb; // Left Windows/Command key
    pub const XK_Super_R: Keyval = 0xffec; // Right Windows/Command key
}
use keysyms::*;

/// Map a named host key to its keyval. Character keys are not named and map
/// to `None`.
pub fn map_host_key(key: HostKey) -> Option<Keyval> {
    let keyval = match key {
        // Editing
        HostKey::BACKSPACE => XK_BackSpace,
        HostKey::TAB => XK_Tab,
        HostKey::CLEAR => XK_Clear,
        HostKey::RETURN => XK_Return,
        HostKey::PAUSE => XK_Pause,
        HostKey::ESCAPE => XK_Escape,
        HostKey::DELETE => XK_Delete,

        // Keypad
        HostKey::KP_0 => XK_KP_0,
        HostKey::KP_1 => XK_KP_1,
        HostKey::KP_2 => XK_KP_2,
        HostKey::KP_3 => XK_KP_3,
        HostKey::KP_4 => XK_KP_4,
        HostKey::KP_5 => XK_KP_5,
        HostKey::KP_6 => XK_KP_6,
        HostKey::KP_7 => XK_KP_7,
        HostKey::KP_8 => XK_KP_8,
        HostKey::KP_9 => XK_KP_9,
        HostKey::KP_PERIOD => XK_KP_Decimal,
        HostKey::KP_DIVIDE => XK_KP_Divide,
        HostKey::KP_MULTIPLY => XK_KP_Multiply,
        HostKey::KP_MINUS => XK_KP_Subtract,
        HostKey::KP_PLUS => XK_KP_Add,
        HostKey::KP_ENTER => XK_KP_Enter,
        HostKey::KP_EQUALS => XK_KP_Equal,

        // Navigation
        HostKey::UP => XK_Up,
        HostKey::DOWN => XK_Down,
        HostKey::RIGHT => XK_Right,
        HostKey::LEFT => XK_Left,
        HostKey::INSERT => XK_Insert,
        HostKey::HOME => XK_Home,
        HostKey::END => XK_End,
        HostKey::PAGEUP => XK_Page_Up,
        HostKey::PAGEDOWN => XK_Page_Down,

        // Function keys
        HostKey::F1 => XK_F1,
        HostKey::F2 => XK_F2,
        HostKey::F3 => XK_F3,
        HostKey::F4 => XK_F4,
        HostKey::F5 => XK_F5,
        HostKey::F6 => XK_F6,
        HostKey::F7 => XK_F7,
        HostKey::F8 => XK_F8,
        HostKey::F9 => XK_F9,
        HostKey::F10 => XK_F10,
        HostKey::F11 => XK_F11,
        HostKey::F12 => XK_F12,
        HostKey::F13 => XK_F13,
        HostKey::F14 => XK_F14,
        HostKey::F15 => XK_F15,

        // Locks
        HostKey::NUMLOCKCLEAR => XK_Num_Lock,
        HostKey::CAPSLOCK => XK_Caps_Lock,
        HostKey::SCROLLLOCK => XK_Scroll_Lock,

        // Modifiers
        HostKey::RSHIFT => XK_Shift_R,
        HostKey::LSHIFT => XK_Shift_L,
        HostKey::RCTRL => XK_Control_R,
        HostKey::LCTRL => XK_Control_L,
        HostKey::RALT => XK_Alt_R,
        HostKey::LALT => XK_Alt_L,
        HostKey::LGUI => XK_Super_L,
        HostKey::RGUI => XK_Super_R,
        HostKey::MODE => XK_Mode_switch,

        // System
        HostKey::HELP => XK_Help,
        HostKey::PRINTSCREEN => XK_Print,
        HostKey::SYSREQ => XK_Sys_Req,

        _ => return None,
    };
    Some(keyval)
}

/// Translate a key event to a keyval.
///
/// Unnamed keys map to `None`, except that an ASCII symbol pressed with Ctrl
/// held maps to itself.
pub fn translate_key(event: &KeyEvent) -> Option<Keyval> {
    map_host_key(event.key).or_else(|| {
        let sym = event.key.raw();
        let ctrl = event.modifiers.intersects(KeyModifiers::CTRL);
        (ctrl && sym > 0 && sym < 0x100).then_some(sym as Keyval)
    })
}

/// The keyval reported to the device model: the translation, or the raw host
/// symbol when the key is unmapped.
pub fn resolve_keyval(event: &KeyEvent) -> Keyval {
    translate_key(event).unwrap_or(event.key.raw() as Keyval)
}
