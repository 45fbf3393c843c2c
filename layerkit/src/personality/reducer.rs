use layerkit_types::layer::{Layer, LayerMask};
use layerkit_types::modifier::ModTapFlags;

use super::PersonalityState;
use crate::config::PersonalityConfig;
use crate::hid::HidHost;

/// Layers allowed to stay active alongside stenography
const STENO_LAYERS: LayerMask = LayerMask::BASE.with(Layer::Middle).with(Layer::Steno);

impl PersonalityState {
    /// Correct a proposed layer mask before the firmware commits it.
    ///
    /// - The base layer is always kept active.
    /// - The middle layer is forced on while anything deeper is on top, and clears itself
    ///   as soon as it would be on top.
    /// - Reaching the base layer releases every modifier still held by a layer-tap
    ///   modifier key.
    /// - Reaching the mouse layer taps the mouse entry key.
    /// - Reaching stenography drops every layer except base, middle and stenography.
    pub fn reduce<H: HidHost>(&mut self, config: &PersonalityConfig, proposed: LayerMask, host: &mut H) -> LayerMask {
        let mut mask = proposed.with(Layer::Base);

        // Dropping the middle layer leaves base on top, so this settles on the second round
        for _ in 0..Layer::COUNT {
            let top = mask.top();
            if top.is_deeper_than_middle() {
                mask = mask.with(Layer::Middle);
            }

            match top {
                Layer::Base => self.release_tap_mods(host),
                Layer::Middle => {
                    mask = mask.without(Layer::Middle);
                    continue;
                }
                Layer::Mouse => host.tap_key(config.mouse_entry_key),
                Layer::Steno => mask = mask & STENO_LAYERS,
                _ => (),
            }

            debug!("Layer {:?} on top, active layers: {:b}", top, mask.into_bits());
            return mask;
        }

        warn!("Layer state didn't settle: {:b}", mask.into_bits());
        mask
    }

    /// Send key-up for every modifier a layer-tap key left behind
    fn release_tap_mods<H: HidHost>(&mut self, host: &mut H) {
        for modifier in self.tap_mods.iter() {
            info!("Releasing stuck layer-tap modifier {:?}", modifier);
            host.unregister_key(modifier.keycode());
        }
        self.tap_mods = ModTapFlags::new();
    }
}
