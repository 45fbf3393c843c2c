// Centralized validation logic

use std::collections::HashSet;

use layerkit_types::layer::Layer;
use layerkit_types::{LEAVE_KEY_MAX, TAP_MODIFIER_MAX, TAP_THROUGH_MAX};

use crate::error::{ConfigError, ConfigResult};
use crate::{KeyboardTomlConfig, PersonalityTomlConfig};

pub struct Validator;

impl Validator {
    /// Validate all configuration
    pub fn validate_all(config: &KeyboardTomlConfig) -> ConfigResult<()> {
        Self::validate_personality(&config.personality)
    }

    /// Validate the `[personality]` tables
    pub fn validate_personality(config: &PersonalityTomlConfig) -> ConfigResult<()> {
        check_capacity("personality.leave_keys", config.leave_keys.len(), LEAVE_KEY_MAX)?;
        check_capacity("personality.tap_modifiers", config.tap_modifiers.len(), TAP_MODIFIER_MAX)?;
        check_capacity("personality.tap_through", config.tap_through.len(), TAP_THROUGH_MAX)?;

        let mut seen = HashSet::new();
        for key in config.bound_keys() {
            if !key.is_table_driven() {
                return Err(ConfigError::Validation {
                    field: "personality".into(),
                    message: format!("{:?} has fixed behavior and can't be bound in a table", key),
                });
            }
            if !seen.insert(key) {
                return Err(ConfigError::Validation {
                    field: "personality".into(),
                    message: format!("{:?} is bound more than once", key),
                });
            }
        }

        for entry in &config.leave_keys {
            if matches!(entry.layer, Layer::Base | Layer::Middle | Layer::Steno) {
                return Err(ConfigError::InvalidValue {
                    field: "personality.leave_keys".into(),
                    value: format!("{:?}", entry.layer),
                    expected: "a transient layer, not Base, Middle or Steno".into(),
                });
            }
        }

        if !config.mouse_entry_key.is_mouse_key() {
            return Err(ConfigError::InvalidValue {
                field: "personality.mouse_entry_key".into(),
                value: format!("{:?}", config.mouse_entry_key),
                expected: "a mouse key".into(),
            });
        }

        Ok(())
    }
}

fn check_capacity(field: &str, len: usize, max: usize) -> ConfigResult<()> {
    if len > max {
        return Err(ConfigError::Validation {
            field: field.into(),
            message: format!("at most {} entries are supported, got {}", max, len),
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use layerkit_types::keycode::{CustomKey, HidKeyCode};
    use layerkit_types::modifier::TapModifier;

    use super::*;
    use crate::{LeaveKeyConfig, TapModifierConfig, TapThroughConfig};

    fn stock() -> PersonalityTomlConfig {
        PersonalityTomlConfig {
            mouse_entry_key: HidKeyCode::MouseAccel2,
            leave_keys: vec![
                LeaveKeyConfig {
                    key: CustomKey::LeaveNumpad,
                    layer: Layer::Numpad,
                },
                LeaveKeyConfig {
                    key: CustomKey::LeaveMouse,
                    layer: Layer::Mouse,
                },
            ],
            tap_modifiers: vec![TapModifierConfig {
                key: CustomKey::TapShift,
                modifier: TapModifier::Shift,
            }],
            tap_through: vec![TapThroughConfig {
                key: CustomKey::ClickA,
                tap: HidKeyCode::A,
            }],
        }
    }

    #[test]
    fn test_stock_tables_pass() {
        assert_eq!(Validator::validate_personality(&stock()), Ok(()));
        assert_eq!(Validator::validate_personality(&PersonalityTomlConfig::default()), Ok(()));
    }

    #[test]
    fn test_too_many_tap_modifiers() {
        let mut config = stock();
        let extra = TapModifierConfig {
            key: CustomKey::TapGui,
            modifier: TapModifier::Gui,
        };
        config.tap_modifiers = vec![extra; TAP_MODIFIER_MAX + 1];
        let err = Validator::validate_personality(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "personality.tap_modifiers"));
    }

    #[test]
    fn test_key_bound_in_two_tables() {
        let mut config = stock();
        config.tap_through.push(TapThroughConfig {
            key: CustomKey::LeaveNumpad,
            tap: HidKeyCode::Kc1,
        });
        let err = Validator::validate_personality(&config).unwrap_err();
        assert!(err.to_string().contains("LeaveNumpad is bound more than once"));
    }

    #[test]
    fn test_fixed_key_cannot_be_bound() {
        let mut config = stock();
        config.leave_keys.push(LeaveKeyConfig {
            key: CustomKey::LockLayer,
            layer: Layer::Symbols,
        });
        let err = Validator::validate_personality(&config).unwrap_err();
        assert!(err.to_string().contains("LockLayer has fixed behavior"));
    }

    #[test]
    fn test_leave_key_on_permanent_layer() {
        for layer in [Layer::Base, Layer::Middle, Layer::Steno] {
            let mut config = stock();
            config.leave_keys[0].layer = layer;
            let err = Validator::validate_personality(&config).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    field: "personality.leave_keys".into(),
                    value: format!("{:?}", layer),
                    expected: "a transient layer, not Base, Middle or Steno".into(),
                }
            );
        }
    }

    #[test]
    fn test_mouse_entry_key_must_be_a_mouse_key() {
        let mut config = stock();
        config.mouse_entry_key = HidKeyCode::Escape;
        assert!(Validator::validate_personality(&config).is_err());
        config.mouse_entry_key = HidKeyCode::MouseAccel0;
        assert!(Validator::validate_personality(&config).is_ok());
    }
}
