//! Personality state shared by the layer reducer and the key event dispatcher.

mod dispatcher;
mod reducer;

use layerkit_types::modifier::ModTapFlags;

/// Process-wide flags of the personality layer.
///
/// Lives for as long as the keyboard does and does not survive a power cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersonalityState {
    /// The transient layer currently on top is pinned and survives release of its leave key
    pub(crate) locked: bool,
    /// Modifiers held on behalf of layer-tap modifier keys
    pub(crate) tap_mods: ModTapFlags,
    /// The escape/grave key chose grave at press time
    pub(crate) sent_grave: bool,
}

impl PersonalityState {
    pub const fn new() -> Self {
        Self {
            locked: false,
            tap_mods: ModTapFlags::new(),
            sent_grave: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn tap_mods(&self) -> ModTapFlags {
        self.tap_mods
    }

    pub fn sent_grave(&self) -> bool {
        self.sent_grave
    }
}
