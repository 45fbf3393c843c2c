//! Report-based [`HidHost`] that feeds the firmware's hid writer through
//! [`KEYBOARD_REPORT_CHANNEL`].

use layerkit_types::keycode::HidKeyCode;
use layerkit_types::modifier::HidModifiers;

use crate::channel::{KEYBOARD_REPORT_CHANNEL, RESET_SIGNAL};
use crate::hid::HidHost;

/// Boot protocol keyboard report: modifier byte and up to six keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8, // HidModifiers
    pub keycodes: [u8; 6],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Pointer acceleration change, level 0 is the slowest
    MouseAccel(u8),
}

/// Keeps the current keyboard report and publishes it on every change.
#[derive(Debug)]
pub struct ReportHost {
    held_modifiers: HidModifiers,
    held_keycodes: [HidKeyCode; 6],
}

impl Default for ReportHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportHost {
    pub const fn new() -> Self {
        Self {
            held_modifiers: HidModifiers::new(),
            held_keycodes: [HidKeyCode::No; 6],
        }
    }

    /// Keys currently held in the report, free slots are `HidKeyCode::No`
    pub fn held_keycodes(&self) -> &[HidKeyCode; 6] {
        &self.held_keycodes
    }

    pub fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: self.held_modifiers.into_bits(),
            keycodes: self.held_keycodes.map(|k| k as u8),
        }
    }

    fn send_report(&self, report: Report) {
        if KEYBOARD_REPORT_CHANNEL.try_send(report).is_err() {
            warn!("Report channel is full, dropping {:?}", report);
        }
    }

    fn send_keyboard_report(&self) {
        self.send_report(Report::KeyboardReport(self.report()));
    }

    fn register_keycode(&mut self, key: HidKeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        // Find the first free slot
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == HidKeyCode::No) {
            self.held_keycodes[index] = key;
        } else {
            warn!("Keyboard report is full, dropping {:?}", key);
        }
    }

    fn unregister_keycode(&mut self, key: HidKeyCode) {
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == key) {
            self.held_keycodes[index] = HidKeyCode::No;
        }
    }
}

impl HidHost for ReportHost {
    fn register_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers();
        } else if key.is_mouse_key() {
            if let Some(level) = key.mouse_accel_level() {
                self.send_report(Report::MouseAccel(level));
            }
            return;
        } else if key != HidKeyCode::No {
            self.register_keycode(key);
        } else {
            return;
        }
        self.send_keyboard_report();
    }

    fn unregister_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers();
        } else if key.is_mouse_key() || key == HidKeyCode::No {
            return;
        } else {
            self.unregister_keycode(key);
        }
        self.send_keyboard_report();
    }

    fn held_modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    fn jump_to_bootloader(&mut self) {
        RESET_SIGNAL.signal(());
    }
}
