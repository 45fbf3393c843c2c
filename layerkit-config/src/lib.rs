//! Loads the personality tables of a layerkit keyboard from `keyboard.toml`.
//!
//! ```toml
//! [personality]
//! mouse_entry_key = "MouseAccel2"
//! leave_keys = [ { key = "LeaveNumpad", layer = "Numpad" } ]
//! tap_modifiers = [ { key = "TapShift", modifier = "Shift" } ]
//! tap_through = [ { key = "ClickA", tap = "A" } ]
//! ```

use layerkit_types::keycode::{CustomKey, HidKeyCode};
use layerkit_types::layer::Layer;
use layerkit_types::modifier::TapModifier;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod config;
pub mod error;

pub use config::{ConfigLoader, Validator};
pub use error::{ConfigError, ConfigResult};

/// Bundled defaults, the user's file is merged on top of it
pub(crate) const DEFAULT_CONFIG: &str = include_str!("default_config/personality.toml");

/// Top level of `keyboard.toml`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyboardTomlConfig {
    /// Personality tables
    #[serde(default)]
    pub personality: PersonalityTomlConfig,
}

/// The `[personality]` table
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalityTomlConfig {
    /// Key tapped every time the mouse layer comes on top
    #[serde_inline_default(HidKeyCode::MouseAccel2)]
    pub mouse_entry_key: HidKeyCode,
    #[serde(default)]
    pub leave_keys: Vec<LeaveKeyConfig>,
    #[serde(default)]
    pub tap_modifiers: Vec<TapModifierConfig>,
    #[serde(default)]
    pub tap_through: Vec<TapThroughConfig>,
}

impl Default for PersonalityTomlConfig {
    fn default() -> Self {
        Self {
            mouse_entry_key: HidKeyCode::MouseAccel2,
            leave_keys: Vec::new(),
            tap_modifiers: Vec::new(),
            tap_through: Vec::new(),
        }
    }
}

/// A layer-leave key and the layer it releases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeaveKeyConfig {
    pub key: CustomKey,
    pub layer: Layer,
}

/// A layer-tap modifier key and the modifier it holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapModifierConfig {
    pub key: CustomKey,
    pub modifier: TapModifier,
}

/// A key that taps an ordinary key on press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapThroughConfig {
    pub key: CustomKey,
    pub tap: HidKeyCode,
}

impl PersonalityTomlConfig {
    /// Leave-key table in the shape `PersonalityConfig::new` takes
    pub fn leave_key_table(&self) -> Vec<(CustomKey, Layer)> {
        self.leave_keys.iter().map(|e| (e.key, e.layer)).collect()
    }

    /// Layer-tap modifier table in the shape `PersonalityConfig::new` takes
    pub fn tap_modifier_table(&self) -> Vec<(CustomKey, TapModifier)> {
        self.tap_modifiers.iter().map(|e| (e.key, e.modifier)).collect()
    }

    /// Tap-through table in the shape `PersonalityConfig::new` takes
    pub fn tap_through_table(&self) -> Vec<(CustomKey, HidKeyCode)> {
        self.tap_through.iter().map(|e| (e.key, e.tap)).collect()
    }

    /// Every custom key bound by any table, in table order
    pub(crate) fn bound_keys(&self) -> impl Iterator<Item = CustomKey> + '_ {
        self.leave_keys
            .iter()
            .map(|e| e.key)
            .chain(self.tap_modifiers.iter().map(|e| e.key))
            .chain(self.tap_through.iter().map(|e| e.key))
    }
}
