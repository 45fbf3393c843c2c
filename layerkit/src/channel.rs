//! Exposed channels which connect the keyboard to the rest of the firmware

use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
pub use embassy_sync::{blocking_mutex, channel, signal};

use crate::event::KeyboardEvent;
use crate::reporter::Report;
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel for key events, filled by the matrix side and drained by the keyboard
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for reports from the keyboard to the hid writer
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();
/// Raised by the reset key, the firmware awaits it and reboots into the bootloader
pub static RESET_SIGNAL: Signal<RawMutex, ()> = Signal::new();
