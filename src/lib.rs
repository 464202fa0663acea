//! Tap dance gesture resolution.
//!
//! A "tap dance" key means different things depending on how many times it is
//! tapped in quick succession, and on whether the last press is held down.
//! This crate turns a stream of per-slot press/release events, plus a
//! periodic scan tick, into the key actions those gestures stand for.  It
//! deliberately knows nothing about matrix scanning, layers, or USB reports;
//! events come in already debounced, and actions go out through a queue the
//! host environment drains.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use bitflags::bitflags;

pub use usbd_human_interface_device::page::Keyboard;

pub use counter::Verdict;
pub use dispatch::{SlotConfig, TapDanceManager};

pub mod action;
pub mod counter;
pub mod dispatch;
pub mod preonic;
pub mod typer;

#[cfg(all(feature = "defmt", not(test)))]
mod log {
    pub use defmt::{info, warn};
}

#[cfg(any(not(feature = "defmt"), test))]
mod log {
    pub use log::{info, warn};
}

/// Key events indicate tap dance slot keys going up or down.  The payload is
/// the slot id, a small index stable for the life of the process.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KeyEvent::Press(k) => defmt::write!(fmt, "KeyEvent::Press({})", k),
            KeyEvent::Release(k) => defmt::write!(fmt, "KeyEvent::Release({})", k),
        }
    }
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }

    pub fn is_press(&self) -> bool {
        match self {
            KeyEvent::Press(_) => true,
            KeyEvent::Release(_) => false,
        }
    }

    pub fn is_release(&self) -> bool {
        match self {
            KeyEvent::Press(_) => false,
            KeyEvent::Release(_) => true,
        }
    }
}

/// Indicates a keypress change that should be sent to the host.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum KeyAction {
    /// Hold a keycode down, with the given modifiers active around it.
    KeyPress(Keyboard, Mods),
    /// Release a keycode held by an earlier KeyPress.
    KeyRelease(Keyboard),
    /// Activate a set of modifiers on their own.
    ModSet(Mods),
    /// Deactivate modifiers activated by an earlier ModSet.
    ModClear(Mods),
}

bitflags! {
    /// A modifier map. This indicates what modifiers should be held down when
    /// this keypress is sent.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
    }
}

/// Where resolved actions go.  The host environment drains this into its HID
/// report machinery.  Implementations must preserve order.
pub trait ActionQueue {
    fn push(&mut self, action: KeyAction);
}
