//! The boundary between the personality layer and whatever owns the HID output.

use layerkit_types::keycode::HidKeyCode;
use layerkit_types::modifier::HidModifiers;

/// Output side of the keyboard, as seen by the personality layer.
///
/// Every call takes effect immediately, there is no batching.
pub trait HidHost {
    /// Press a key, or hold a modifier
    fn register_key(&mut self, key: HidKeyCode);

    /// Release a key or modifier
    fn unregister_key(&mut self, key: HidKeyCode);

    /// Press and immediately release a key
    fn tap_key(&mut self, key: HidKeyCode) {
        self.register_key(key);
        self.unregister_key(key);
    }

    /// Modifiers currently held in the outgoing report
    fn held_modifiers(&self) -> HidModifiers;

    /// Leave the firmware and restart into the bootloader
    fn jump_to_bootloader(&mut self);
}
