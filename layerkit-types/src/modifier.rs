use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

use crate::keycode::HidKeyCode;

/// Modifier byte of a HID keyboard report, one bit per physical modifier key.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidModifiers {
    pub const LCTRL: Self = Self::new().with_left_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_left_shift(true);
    pub const LALT: Self = Self::new().with_left_alt(true);
    pub const LGUI: Self = Self::new().with_left_gui(true);
    pub const RCTRL: Self = Self::new().with_right_ctrl(true);
    pub const RSHIFT: Self = Self::new().with_right_shift(true);
    pub const RALT: Self = Self::new().with_right_alt(true);
    pub const RGUI: Self = Self::new().with_right_gui(true);

    /// Either alt key, nothing else
    pub const ANY_ALT: Self = Self::new().with_left_alt(true).with_right_alt(true);

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Returns `true` if at least one modifier is held and every held modifier is an alt key.
    ///
    /// Left alt, right alt, or both count; any other modifier alongside them does not.
    pub fn is_only_alt(self) -> bool {
        !self.is_empty() && (self & !Self::ANY_ALT).is_empty()
    }
}

/// Virtual modifiers that a layer-tap modifier key can hold down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapModifier {
    Shift,
    Ctrl,
    Alt,
    Gui,
}

impl TapModifier {
    pub const ALL: [TapModifier; 4] = [TapModifier::Shift, TapModifier::Ctrl, TapModifier::Alt, TapModifier::Gui];

    /// The keycode emitted for this modifier, always the left-hand key
    pub const fn keycode(self) -> HidKeyCode {
        match self {
            TapModifier::Shift => HidKeyCode::LShift,
            TapModifier::Ctrl => HidKeyCode::LCtrl,
            TapModifier::Alt => HidKeyCode::LAlt,
            TapModifier::Gui => HidKeyCode::LGui,
        }
    }
}

/// Modifiers currently held down by layer-tap modifier keys.
///
/// | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- |
/// | GUI | ALT | CTRL | SHIFT |
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModTapFlags {
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(4)]
    _reserved: u8,
}

impl ModTapFlags {
    pub fn is_set(self, modifier: TapModifier) -> bool {
        match modifier {
            TapModifier::Shift => self.shift(),
            TapModifier::Ctrl => self.ctrl(),
            TapModifier::Alt => self.alt(),
            TapModifier::Gui => self.gui(),
        }
    }

    pub fn set(&mut self, modifier: TapModifier, held: bool) {
        match modifier {
            TapModifier::Shift => self.set_shift(held),
            TapModifier::Ctrl => self.set_ctrl(held),
            TapModifier::Alt => self.set_alt(held),
            TapModifier::Gui => self.set_gui(held),
        }
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Iterate over the modifiers still flagged, in bit order
    pub fn iter(self) -> impl Iterator<Item = TapModifier> {
        TapModifier::ALL.into_iter().filter(move |m| self.is_set(*m))
    }
}
