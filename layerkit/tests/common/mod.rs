#![allow(dead_code)]

use layerkit::config::PersonalityConfig;
use layerkit::event::KeyboardEvent;
use layerkit::hid::HidHost;
use layerkit::keyboard::Keyboard;
use layerkit::types::action::Action;
use layerkit::types::keycode::{CustomKey, HidKeyCode};
use layerkit::types::layer::{Layer, LayerMask};
use layerkit::types::modifier::HidModifiers;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything a test host saw, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Down(HidKeyCode),
    Up(HidKeyCode),
    Bootloader,
}

pub use HostEvent::{Bootloader, Down, Up};

/// A [`HidHost`] that records every call and tracks held modifiers
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    pub modifiers: HidModifiers,
}

impl RecordingHost {
    /// Return the recorded events and start a new recording
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl HidHost for RecordingHost {
    fn register_key(&mut self, key: HidKeyCode) {
        self.modifiers |= key.to_hid_modifiers();
        self.events.push(Down(key));
    }

    fn unregister_key(&mut self, key: HidKeyCode) {
        self.modifiers &= !key.to_hid_modifiers();
        self.events.push(Up(key));
    }

    fn held_modifiers(&self) -> HidModifiers {
        self.modifiers
    }

    fn jump_to_bootloader(&mut self) {
        self.events.push(Bootloader);
    }
}

pub fn create_test_keyboard() -> Keyboard<RecordingHost> {
    Keyboard::new(PersonalityConfig::default(), RecordingHost::default())
}

pub fn custom(key: CustomKey) -> Action {
    Action::Custom(key)
}

pub fn press(keyboard: &mut Keyboard<RecordingHost>, action: Action) {
    keyboard.process(KeyboardEvent::press(action));
}

pub fn release(keyboard: &mut Keyboard<RecordingHost>, action: Action) {
    keyboard.process(KeyboardEvent::release(action));
}

pub fn tap(keyboard: &mut Keyboard<RecordingHost>, action: Action) {
    press(keyboard, action);
    release(keyboard, action);
}

/// Build a mask from a list of layers, the base layer is not added implicitly
pub fn mask(layers: &[Layer]) -> LayerMask {
    layers.iter().copied().collect()
}
