//! # layerkit types
//!
//! Fundamental type definitions shared by the layerkit crates.
//!
//! ## Modules
//!
//! - [`action`] - What a physical key transition carries into the core
//! - [`keycode`] - HID keycodes and the custom keycodes of the personality layer
//! - [`layer`] - Layer identifiers and the active-layer bitset
//! - [`modifier`] - Physical modifier state and layer-tap modifier flags
//!
//! `layerkit` consumes these for its state machines, `layerkit-config` deserializes
//! them from `keyboard.toml`.

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod layer;
pub mod modifier;

/// Maximum number of layer-leave keys in the personality tables
pub const LEAVE_KEY_MAX: usize = 8;
/// Maximum number of layer-tap modifier keys in the personality tables
pub const TAP_MODIFIER_MAX: usize = 4;
/// Maximum number of tap-through keys in the personality tables
pub const TAP_THROUGH_MAX: usize = 4;
