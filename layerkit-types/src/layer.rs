use core::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// Keyboard layers.
///
/// The discriminant is the layer's bit in [`LayerMask`]. Which active layer wins is decided
/// by [`Layer::priority`], not by the discriminant.
///
/// ```text
/// Base
/// ├── Numpad (NumpadDigits)
/// ├── Symbols
/// ├── Function (Function1x, Function2x)
/// ├── Arrows
/// ├── Mouse
/// └── Game, HomeRow, BottomRow
/// SafeBase
/// Steno
/// ```
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, EnumCount, EnumIter, FromRepr,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Permanent base layer, never deactivated
    Base = 0,
    /// Strips base-layer conveniences while any deeper layer is active
    Middle = 1,
    Numpad = 2,
    NumpadDigits = 3,
    Symbols = 4,
    Arrows = 5,
    Mouse = 6,
    Game = 7,
    HomeRow = 8,
    BottomRow = 9,
    Function = 10,
    Function1x = 11,
    Function2x = 12,
    /// Plain base layout without dual-purpose keys
    SafeBase = 13,
    /// Stenography chording, excludes every other deep layer
    Steno = 14,
}

impl Layer {
    /// Number of layers
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// Priority used to pick the top layer, higher wins.
    ///
    /// No two layers share a priority.
    pub const fn priority(self) -> u8 {
        match self {
            Layer::Base => 0,
            Layer::Middle => 1,
            Layer::Numpad => 2,
            Layer::NumpadDigits => 3,
            Layer::Symbols => 4,
            Layer::Arrows => 5,
            Layer::Mouse => 6,
            Layer::Game => 7,
            Layer::HomeRow => 8,
            Layer::BottomRow => 9,
            Layer::Function => 10,
            Layer::Function1x => 11,
            Layer::Function2x => 12,
            Layer::SafeBase => 13,
            Layer::Steno => 14,
        }
    }

    /// Returns `true` if this layer sits above the middle layer
    pub const fn is_deeper_than_middle(self) -> bool {
        self.priority() > Layer::Middle.priority()
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// Set of active layers, one bit per [`Layer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerMask(u16);

impl LayerMask {
    pub const EMPTY: Self = Self(0);
    /// The power-on state, only the base layer is active
    pub const BASE: Self = Self::only(Layer::Base);

    pub const fn only(layer: Layer) -> Self {
        Self(layer.bit())
    }

    /// Build a mask from raw bits, bits without a layer are dropped
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & ((1 << Layer::COUNT) - 1))
    }

    pub const fn into_bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }

    #[must_use]
    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | layer.bit())
    }

    #[must_use]
    pub const fn without(self, layer: Layer) -> Self {
        Self(self.0 & !layer.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Active layers in id order
    pub fn iter(self) -> impl Iterator<Item = Layer> {
        Layer::iter().filter(move |l| self.contains(*l))
    }

    /// The active layer with the highest priority, `Base` if nothing is active
    pub fn top(self) -> Layer {
        self.iter().max_by_key(|l| l.priority()).unwrap_or(Layer::Base)
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Layer> for LayerMask {
    fn from_iter<T: IntoIterator<Item = Layer>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, LayerMask::with)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_priorities_are_unique() {
        for a in Layer::iter() {
            for b in Layer::iter() {
                if a != b {
                    assert_ne!(a.priority(), b.priority(), "{:?} and {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_top_layer() {
        assert_eq!(LayerMask::EMPTY.top(), Layer::Base);
        assert_eq!(LayerMask::BASE.top(), Layer::Base);

        let mask = LayerMask::BASE.with(Layer::Middle).with(Layer::Numpad).with(Layer::Mouse);
        assert_eq!(mask.top(), Layer::Mouse);
        assert_eq!(mask.without(Layer::Mouse).top(), Layer::Numpad);
        assert_eq!(LayerMask::BASE.with(Layer::Middle).top(), Layer::Middle);
    }

    #[test]
    fn test_mask_bits() {
        let mask: LayerMask = [Layer::Base, Layer::Middle, Layer::Steno].into_iter().collect();
        assert_eq!(mask.into_bits(), 0b100_0000_0000_0011);
        assert!(mask.contains(Layer::Steno));
        assert!(!mask.contains(Layer::Numpad));
        assert_eq!(LayerMask::from_bits(0xFFFF).into_bits(), 0x7FFF);
        assert_eq!(mask & LayerMask::only(Layer::Steno), LayerMask::only(Layer::Steno));
        assert_eq!(Layer::COUNT, 15);
    }

    #[test]
    fn test_deeper_than_middle() {
        assert!(!Layer::Base.is_deeper_than_middle());
        assert!(!Layer::Middle.is_deeper_than_middle());
        assert!(Layer::Numpad.is_deeper_than_middle());
        assert!(Layer::Steno.is_deeper_than_middle());
    }
}
