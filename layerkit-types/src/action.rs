use serde::{Deserialize, Serialize};

use crate::keycode::{CustomKey, HidKeyCode};
use crate::layer::Layer;

/// A basic action that a key transition asks the keyboard to execute.
///
/// `Custom` actions go to the personality dispatcher first; everything else, and any
/// custom key the dispatcher declines, is handled by the keyboard's built-in processing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// No action
    #[default]
    No,
    /// A normal key stroke
    Key(HidKeyCode),
    /// A personality keycode
    Custom(CustomKey),
    /// Activate a layer while the key is held
    Momentary(Layer),
    /// Toggle a layer when the key is released
    Toggle(Layer),
    /// Activate a layer and deactivate all other layers(except the base layer)
    To(Layer),
    /// Jump to the bootloader
    Reset,
}

impl From<HidKeyCode> for Action {
    fn from(key: HidKeyCode) -> Self {
        Action::Key(key)
    }
}

impl From<CustomKey> for Action {
    fn from(key: CustomKey) -> Self {
        Action::Custom(key)
    }
}
