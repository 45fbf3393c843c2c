use layerkit_types::action::Action;

/// A key transition delivered by the matrix side of the firmware, already resolved to the
/// action bound at that position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub action: Action,
    pub pressed: bool,
}

impl KeyboardEvent {
    pub const fn press(action: Action) -> Self {
        Self { action, pressed: true }
    }

    pub const fn release(action: Action) -> Self {
        Self { action, pressed: false }
    }
}
