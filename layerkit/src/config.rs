use heapless::Vec;
use layerkit_types::keycode::{CustomKey, HidKeyCode};
use layerkit_types::layer::Layer;
use layerkit_types::modifier::TapModifier;
use layerkit_types::{LEAVE_KEY_MAX, TAP_MODIFIER_MAX, TAP_THROUGH_MAX};

/// Tables that bind the table-driven custom keys to what they act on.
///
/// `Default` gives the stock personality: one leave key per transient layer, one
/// layer-tap key per modifier, and the two game click keys.
#[derive(Clone, Debug)]
pub struct PersonalityConfig {
    /// Layer-leave keys and the layer each one releases
    pub leave_keys: Vec<(CustomKey, Layer), LEAVE_KEY_MAX>,
    /// Layer-tap modifier keys and the modifier each one holds
    pub tap_modifiers: Vec<(CustomKey, TapModifier), TAP_MODIFIER_MAX>,
    /// Keys that tap an ordinary key on press
    pub tap_through: Vec<(CustomKey, HidKeyCode), TAP_THROUGH_MAX>,
    /// Key tapped every time the mouse layer becomes the top layer
    pub mouse_entry_key: HidKeyCode,
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self::new(
            &[
                (CustomKey::LeaveNumpad, Layer::Numpad),
                (CustomKey::LeaveSymbols, Layer::Symbols),
                (CustomKey::LeaveArrows, Layer::Arrows),
                (CustomKey::LeaveMouse, Layer::Mouse),
                (CustomKey::LeaveFunction, Layer::Function),
            ],
            &[
                (CustomKey::TapShift, TapModifier::Shift),
                (CustomKey::TapCtrl, TapModifier::Ctrl),
                (CustomKey::TapAlt, TapModifier::Alt),
                (CustomKey::TapGui, TapModifier::Gui),
            ],
            &[(CustomKey::ClickA, HidKeyCode::A), (CustomKey::ClickP, HidKeyCode::P)],
            HidKeyCode::MouseAccel2,
        )
    }
}

impl PersonalityConfig {
    /// Build the tables from slices, entries beyond a table's capacity and repeated keys
    /// are dropped.
    pub fn new(
        leave_keys: &[(CustomKey, Layer)],
        tap_modifiers: &[(CustomKey, TapModifier)],
        tap_through: &[(CustomKey, HidKeyCode)],
        mouse_entry_key: HidKeyCode,
    ) -> Self {
        Self {
            leave_keys: fill_table(leave_keys),
            tap_modifiers: fill_table(tap_modifiers),
            tap_through: fill_table(tap_through),
            mouse_entry_key,
        }
    }

    /// The layer released by a leave key
    pub fn leave_layer(&self, key: CustomKey) -> Option<Layer> {
        lookup(&self.leave_keys, key)
    }

    /// The modifier held by a layer-tap modifier key
    pub fn tap_modifier(&self, key: CustomKey) -> Option<TapModifier> {
        lookup(&self.tap_modifiers, key)
    }

    /// The key tapped by a tap-through key
    pub fn tap_through_key(&self, key: CustomKey) -> Option<HidKeyCode> {
        lookup(&self.tap_through, key)
    }
}

fn fill_table<T: Copy, const N: usize>(entries: &[(CustomKey, T)]) -> Vec<(CustomKey, T), N> {
    let mut table: Vec<(CustomKey, T), N> = Vec::new();
    for entry in entries {
        if lookup(&table, entry.0).is_some() {
            warn!("{:?} is already in the personality table, ignoring duplicate", entry.0);
            continue;
        }
        if table.push(*entry).is_err() {
            warn!("Personality table is full, dropping {:?}", entry.0);
        }
    }
    table
}

fn lookup<T: Copy>(table: &[(CustomKey, T)], key: CustomKey) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
