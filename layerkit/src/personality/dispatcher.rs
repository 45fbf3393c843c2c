use layerkit_types::keycode::{CustomKey, HidKeyCode};
use layerkit_types::layer::Layer;
use layerkit_types::modifier::TapModifier;

use super::PersonalityState;
use crate::config::PersonalityConfig;
use crate::hid::HidHost;
use crate::layer_state::LayerState;

impl PersonalityState {
    /// Process a custom keycode transition.
    ///
    /// Returns `true` if the key was consumed, in which case the firmware core must not run
    /// its default processing for it. Layer changes made here land in the proposed mask of
    /// `layers` and are left for the caller to commit, except for `StenoExitAlt` which
    /// commits before pressing alt.
    pub fn dispatch<H: HidHost>(
        &mut self,
        config: &PersonalityConfig,
        layers: &mut LayerState,
        key: CustomKey,
        pressed: bool,
        host: &mut H,
    ) -> bool {
        debug!("Processing custom key: {:?}, pressed: {}", key, pressed);
        match key {
            CustomKey::LockLayer => {
                if pressed {
                    info!("Locking layer {:?}", layers.proposed().top());
                    self.locked = true;
                }
            }
            CustomKey::EscapeGrave => self.process_escape_grave(pressed, host),
            CustomKey::StenoEnter => {
                if !pressed {
                    layers.activate(Layer::Steno);
                }
            }
            CustomKey::StenoExit => {
                if !pressed {
                    layers.deactivate(Layer::Steno);
                }
            }
            CustomKey::StenoExitEscape => {
                if pressed {
                    host.register_key(HidKeyCode::Escape);
                } else {
                    host.unregister_key(HidKeyCode::Escape);
                    layers.deactivate(Layer::Steno);
                }
            }
            CustomKey::StenoExitAlt => {
                if pressed {
                    // Leave steno for real before alt goes down
                    layers.deactivate(Layer::Steno);
                    layers.commit(self, config, host);
                    host.register_key(HidKeyCode::LAlt);
                } else {
                    host.unregister_key(HidKeyCode::LAlt);
                }
            }
            _ => return self.dispatch_table_key(config, layers, key, pressed, host),
        }
        true
    }

    /// Keys whose target comes from the personality tables
    fn dispatch_table_key<H: HidHost>(
        &mut self,
        config: &PersonalityConfig,
        layers: &mut LayerState,
        key: CustomKey,
        pressed: bool,
        host: &mut H,
    ) -> bool {
        if let Some(layer) = config.leave_layer(key) {
            self.process_leave_key(layers, layer, pressed);
        } else if let Some(modifier) = config.tap_modifier(key) {
            self.process_tap_modifier(modifier, pressed, host);
        } else if let Some(tap) = config.tap_through_key(key) {
            if pressed {
                host.tap_key(tap);
            }
        } else {
            warn!("Custom key {:?} is not bound in the personality tables", key);
            return false;
        }
        true
    }

    /// Escape most of the time, grave when alt and only alt is held
    fn process_escape_grave<H: HidHost>(&mut self, pressed: bool, host: &mut H) {
        if pressed {
            self.sent_grave = host.held_modifiers().is_only_alt();
        }
        let key = if self.sent_grave { HidKeyCode::Grave } else { HidKeyCode::Escape };
        if pressed {
            host.register_key(key);
        } else {
            host.unregister_key(key);
        }
    }

    /// Unlock on key-down, release the layer on key-up unless it got locked in between
    fn process_leave_key(&mut self, layers: &mut LayerState, layer: Layer, pressed: bool) {
        if pressed {
            self.locked = false;
        } else if !self.locked {
            layers.deactivate(layer);
        } else {
            debug!("Layer {:?} is locked, keeping it active", layer);
        }
    }

    fn process_tap_modifier<H: HidHost>(&mut self, modifier: TapModifier, pressed: bool, host: &mut H) {
        if pressed {
            host.register_key(modifier.keycode());
        } else {
            host.unregister_key(modifier.keycode());
        }
        self.tap_mods.set(modifier, pressed);
    }
}
