use layerkit_types::layer::{Layer, LayerMask};

use crate::config::PersonalityConfig;
use crate::hid::HidHost;
use crate::personality::PersonalityState;

/// Active-layer bookkeeping.
///
/// Layer primitives only touch the proposed mask. The keyboard commits it through the
/// reducer once the current event has been fully processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState {
    committed: LayerMask,
    proposed: LayerMask,
}

impl Default for LayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerState {
    pub const fn new() -> Self {
        Self {
            committed: LayerMask::BASE,
            proposed: LayerMask::BASE,
        }
    }

    /// The committed active-layer set
    pub fn current(&self) -> LayerMask {
        self.committed
    }

    /// The pending active-layer set, before the reducer has seen it
    pub fn proposed(&self) -> LayerMask {
        self.proposed
    }

    /// The committed top layer
    pub fn top(&self) -> Layer {
        self.committed.top()
    }

    /// Returns `true` if a layer primitive changed the set since the last commit
    pub fn is_dirty(&self) -> bool {
        self.proposed != self.committed
    }

    /// Activate given layer
    pub fn activate(&mut self, layer: Layer) {
        self.proposed = self.proposed.with(layer);
    }

    /// Deactivate given layer, the base layer can't be deactivated
    pub fn deactivate(&mut self, layer: Layer) {
        if layer == Layer::Base {
            warn!("The base layer is permanent, ignoring deactivation");
            return;
        }
        self.proposed = self.proposed.without(layer);
    }

    /// Toggle given layer
    pub fn toggle(&mut self, layer: Layer) {
        if self.proposed.contains(layer) {
            self.deactivate(layer);
        } else {
            self.activate(layer);
        }
    }

    /// Activate given layer and deactivate all others except the base layer
    pub fn move_to(&mut self, layer: Layer) {
        self.proposed = LayerMask::BASE.with(layer);
    }

    /// Pass the proposed set through the reducer and commit the result
    pub fn commit<H: HidHost>(&mut self, personality: &mut PersonalityState, config: &PersonalityConfig, host: &mut H) {
        let reduced = personality.reduce(config, self.proposed, host);
        self.committed = reduced;
        self.proposed = reduced;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_primitives_touch_proposed_only() {
        let mut layers = LayerState::new();
        assert!(!layers.is_dirty());

        layers.activate(Layer::Numpad);
        assert!(layers.is_dirty());
        assert_eq!(layers.current(), LayerMask::BASE);
        assert_eq!(layers.proposed(), LayerMask::BASE.with(Layer::Numpad));

        layers.deactivate(Layer::Numpad);
        assert!(!layers.is_dirty());
    }

    #[test]
    fn test_base_is_permanent() {
        let mut layers = LayerState::new();
        layers.deactivate(Layer::Base);
        layers.toggle(Layer::Base);
        assert_eq!(layers.proposed(), LayerMask::BASE);
    }

    #[test]
    fn test_toggle_and_move_to() {
        let mut layers = LayerState::new();
        layers.toggle(Layer::SafeBase);
        assert!(layers.proposed().contains(Layer::SafeBase));
        layers.toggle(Layer::SafeBase);
        assert!(!layers.proposed().contains(Layer::SafeBase));

        layers.activate(Layer::Numpad);
        layers.activate(Layer::Mouse);
        layers.move_to(Layer::SafeBase);
        assert_eq!(layers.proposed(), LayerMask::BASE.with(Layer::SafeBase));
    }
}
