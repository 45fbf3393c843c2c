//! # layerkit
//!
//! Layer and modifier control logic for a split keyboard's personality layer.
//!
//! The firmware core delivers key transitions as [`event::KeyboardEvent`]s. The
//! [`keyboard::Keyboard`] hands custom keycodes to the personality dispatcher, falls back to
//! built-in key and layer handling for everything else, and passes every change of the
//! active-layer set through the layer reducer before committing it.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod layer_state;
pub mod personality;
pub mod reporter;

pub use layerkit_types as types;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub type RawMutex = CriticalSectionRawMutex;

/// Depth of the key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Depth of the report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
