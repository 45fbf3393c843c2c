use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::modifier::HidModifiers;

/// Key codes from the HID keyboard/keypad page that the personality layer emits.
///
/// Mouse keys live in the vendor range `0xCD..=0xDF`, the same way the firmware core
/// encodes them.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// `a` and `A`
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    /// `p` and `P`
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Kc1 = 0x1E,
    Kc2 = 0x1F,
    Kc3 = 0x20,
    Kc4 = 0x21,
    Kc5 = 0x22,
    Kc6 = 0x23,
    Kc7 = 0x24,
    Kc8 = 0x25,
    Kc9 = 0x26,
    Kc0 = 0x27,
    /// `Enter`
    Enter = 0x28,
    /// `Esc`
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    LeftBracket = 0x2F,
    RightBracket = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    MouseUp = 0xCD,
    MouseDown = 0xCE,
    MouseLeft = 0xCF,
    MouseRight = 0xD0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    MouseWheelUp = 0xD9,
    MouseWheelDown = 0xDA,
    MouseWheelLeft = 0xDB,
    MouseWheelRight = 0xDC,
    /// Slowest pointer acceleration
    MouseAccel0 = 0xDD,
    MouseAccel1 = 0xDE,
    /// Fastest pointer acceleration
    MouseAccel2 = 0xDF,
    /// Left Control
    LCtrl = 0xE0,
    /// Left Shift
    LShift = 0xE1,
    /// Left Alt
    LAlt = 0xE2,
    /// Left GUI
    LGui = 0xE3,
    /// Right Control
    RCtrl = 0xE4,
    /// Right Shift
    RShift = 0xE5,
    /// Right Alt
    RAlt = 0xE6,
    /// Right GUI
    RGui = 0xE7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub fn is_mouse_key(self) -> bool {
        HidKeyCode::MouseUp <= self && self <= HidKeyCode::MouseAccel2
    }

    /// Acceleration level of a `MouseAccelN` key
    pub fn mouse_accel_level(self) -> Option<u8> {
        match self {
            HidKeyCode::MouseAccel0 => Some(0),
            HidKeyCode::MouseAccel1 => Some(1),
            HidKeyCode::MouseAccel2 => Some(2),
            _ => None,
        }
    }

    /// The modifier bit this keycode sets in a HID report, empty for non-modifiers
    pub fn to_hid_modifiers(self) -> HidModifiers {
        match self {
            HidKeyCode::LCtrl => HidModifiers::LCTRL,
            HidKeyCode::LShift => HidModifiers::LSHIFT,
            HidKeyCode::LAlt => HidModifiers::LALT,
            HidKeyCode::LGui => HidModifiers::LGUI,
            HidKeyCode::RCtrl => HidModifiers::RCTRL,
            HidKeyCode::RShift => HidModifiers::RSHIFT,
            HidKeyCode::RAlt => HidModifiers::RALT,
            HidKeyCode::RGui => HidModifiers::RGUI,
            _ => HidModifiers::new(),
        }
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

/// Keycodes handled by the personality layer instead of the firmware core.
///
/// Which layer a `Leave*` key releases, which modifier a `Tap*` key holds and which key a
/// `Click*` key taps are looked up in the personality tables, not hardcoded here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKey {
    /// Pin the transient layer currently on top
    LockLayer,
    /// Escape, or grave when only alt is held
    EscapeGrave,
    LeaveNumpad,
    LeaveSymbols,
    LeaveArrows,
    LeaveMouse,
    LeaveFunction,
    TapShift,
    TapCtrl,
    TapAlt,
    TapGui,
    ClickA,
    ClickP,
    /// Enter stenography on release
    StenoEnter,
    /// Leave stenography on release
    StenoExit,
    /// Escape, then leave stenography on release
    StenoExitEscape,
    /// Leave stenography, then hold alt
    StenoExitAlt,
}

impl CustomKey {
    /// Returns `true` if the key's behavior is looked up in the personality tables.
    ///
    /// The other keys have fixed behavior and are never looked up.
    pub const fn is_table_driven(self) -> bool {
        !matches!(
            self,
            CustomKey::LockLayer
                | CustomKey::EscapeGrave
                | CustomKey::StenoEnter
                | CustomKey::StenoExit
                | CustomKey::StenoExitEscape
                | CustomKey::StenoExitAlt
        )
    }
}
