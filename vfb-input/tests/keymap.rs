use pretty_assertions::assert_eq;
use vfb_input::{keysyms::*, translate_key, HostKey, KeyEvent, KeyModifiers, Keyval};

/// Every named host key with its documented keyval.
const NAMED_KEYS: &[(HostKey, Keyval)] = &[
    (HostKey::BACKSPACE, 0xff08),
    (HostKey::TAB, 0xff09),
    (HostKey::CLEAR, 0xff0b),
    (HostKey::RETURN, 0xff0d),
    (HostKey::PAUSE, 0xff13),
    (HostKey::ESCAPE, 0xff1b),
    (HostKey::DELETE, 0xffff),
    (HostKey::KP_0, 0xffb0),
    (HostKey::KP_1, 0xffb1),
    (HostKey::KP_2, 0xffb2),
    (HostKey::KP_3, 0xffb3),
    (HostKey::KP_4, 0xffb4),
    (HostKey::KP_5, 0xffb5),
    (HostKey::KP_6, 0xffb6),
    (HostKey::KP_7, 0xffb7),
    (HostKey::KP_8, 0xffb8),
    (HostKey::KP_9, 0xffb9),
    (HostKey::KP_PERIOD, 0xffae),
    (HostKey::KP_DIVIDE, 0xffaf),
    (HostKey::KP_MULTIPLY, 0xffaa),
    (HostKey::KP_MINUS, 0xffad),
    (HostKey::KP_PLUS, 0xffab),
    (HostKey::KP_ENTER, 0xff8d),
    (HostKey::KP_EQUALS, 0xffbd),
    (HostKey::UP, 0xff52),
    (HostKey::DOWN, 0xff54),
    (HostKey::RIGHT, 0xff53),
    (HostKey::LEFT, 0xff51),
    (HostKey::INSERT, 0xff63),
    (HostKey::HOME, 0xff50),
    (HostKey::END, 0xff57),
    (HostKey::PAGEUP, 0xff55),
    (HostKey::PAGEDOWN, 0xff56),
    (HostKey::F1, 0xffbe),
    (HostKey::F2, 0xffbf),
    (HostKey::F3, 0xffc0),
    (HostKey::F4, 0xffc1),
    (HostKey::F5, 0xffc2),
    (HostKey::F6, 0xffc3),
    (HostKey::F7, 0xffc4),
    (HostKey::F8, 0xffc5),
    (HostKey::F9, 0xffc6),
    (HostKey::F10, 0xffc7),
    (HostKey::F11, 0xffc8),
    (HostKey::F12, 0xffc9),
    (HostKey::F13, 0xffca),
    (HostKey::F14, 0xffcb),
    (HostKey::F15, 0xffcc),
    (HostKey::NUMLOCKCLEAR, 0xff7f),
    (HostKey::CAPSLOCK, 0xffe5),
    (HostKey::SCROLLLOCK, 0xff14),
    (HostKey::RSHIFT, 0xffe2),
    (HostKey::LSHIFT, 0xffe1),
    (HostKey::RCTRL, 0xffe4),
    (HostKey::LCTRL, 0xffe3),
    (HostKey::RALT, 0xffea),
    (HostKey::LALT, 0xffe9),
    (HostKey::LGUI, 0xffeb),
    (HostKey::RGUI, 0xffec),
    (HostKey::MODE, 0xff7e),
    (HostKey::HELP, 0xff6a),
    (HostKey::PRINTSCREEN, 0xff61),
    (HostKey::SYSREQ, 0xff15),
];

#[test]
fn test_every_named_key_mapping() {
    for &(key, expected) in NAMED_KEYS {
        assert_eq!(
            translate_key(&KeyEvent::down(key)),
            Some(expected),
            "host key {:#x}",
            key.raw()
        );
    }
}

#[test]
fn test_named_keys_ignore_modifiers() {
    let ev = KeyEvent::new(HostKey::F5, KeyModifiers::CTRL | KeyModifiers::SHIFT, true);
    assert_eq!(translate_key(&ev), Some(XK_F5));
}

#[test]
fn test_ctrl_letter_maps_to_ascii() {
    for c in b'a'..=b'z' {
        let ev = KeyEvent::new(HostKey::ascii(c), KeyModifiers::LCTRL, true);
        assert_eq!(translate_key(&ev), Some(c as Keyval));
    }
}

#[test]
fn test_unmapped_keys_have_no_translation() {
    for key in [HostKey::ascii(b'a'), HostKey::SPACE, HostKey(0x4000_0076)] {
        assert_eq!(translate_key(&KeyEvent::down(key)), None);
    }
}

#[test]
fn test_ctrl_passthrough_range_edges() {
    let ctrl = |raw| KeyEvent::new(HostKey(raw), KeyModifiers::RCTRL, true);
    assert_eq!(translate_key(&ctrl(0x01)), Some(0x01));
    assert_eq!(translate_key(&ctrl(0xff)), Some(0xff));
    assert_eq!(translate_key(&ctrl(0x100)), None);
    assert_eq!(translate_key(&ctrl(0)), None);
}
