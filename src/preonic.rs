//! Tap dance sites from the Preonic layout.
//!
//! Seven slots, loaded once and immutable afterwards:
//!
//! - quotes: once ', twice ", thrice |; four or more fall back to '.
//! - grave: once `, twice ~, thrice types a literal ``` fence.
//! - magic: taps send Hyper-X / Hyper-Y / Hyper-Z chords, any hold acts as
//!   a plain Control.
//! - four number-row keys that double as function keys.

use crate::action::{ActionBinding, Effect};
use crate::dispatch::SlotConfig;
use crate::{Keyboard, Mods};

pub const TD_QUOTES: u8 = 0;
pub const TD_GRAVE: u8 = 1;
pub const TD_MAGIC: u8 = 2;
pub const TD_5_F5: u8 = 3;
pub const TD_7_F7: u8 = 4;
pub const TD_8_F8: u8 = 5;
pub const TD_9_F9: u8 = 6;

/// Tapping term in scan ticks, used for both the tap and hold windows.
const TERM: u16 = 200;

/// Shift, control, alt and gui together.
const HYPER: Mods = Mods::all();

const fn slot(binding: ActionBinding, extended: bool) -> SlotConfig {
    SlotConfig {
        binding,
        tap_term: TERM,
        hold_term: TERM,
        extended,
    }
}

const NO_MODS: Mods = Mods::empty();
const CTRL: Mods = Mods::CONTROL;

pub static SLOTS: [SlotConfig; 7] = [
    // TD_QUOTES
    slot(
        ActionBinding::tiered(
            Effect::Key(Keyboard::Apostrophe, NO_MODS),
            Effect::Key(Keyboard::Apostrophe, Mods::SHIFT),
            Effect::Key(Keyboard::Backslash, Mods::SHIFT),
            Effect::Key(Keyboard::Apostrophe, NO_MODS),
        ),
        true,
    ),
    // TD_GRAVE.  The fence is typed once, so its clear is a no-op.
    slot(
        ActionBinding::tiered(
            Effect::Key(Keyboard::Grave, NO_MODS),
            Effect::Key(Keyboard::Grave, Mods::SHIFT),
            Effect::Literal("```"),
            Effect::Key(Keyboard::Grave, NO_MODS),
        ),
        true,
    ),
    // TD_MAGIC.  Successive taps are intentionally unbound.
    slot(
        ActionBinding::new([
            Effect::Tap(Keyboard::X, HYPER),
            Effect::Modifiers(CTRL),
            Effect::Tap(Keyboard::Y, HYPER),
            Effect::Modifiers(CTRL),
            Effect::Tap(Keyboard::Z, HYPER),
            Effect::Modifiers(CTRL),
            Effect::None,
            Effect::Modifiers(CTRL),
        ]),
        true,
    ),
    // Number row keys that double as function keys.
    slot(ActionBinding::double(Keyboard::Keyboard5, Keyboard::F5), false),
    slot(ActionBinding::double(Keyboard::Keyboard7, Keyboard::F7), false),
    slot(ActionBinding::double(Keyboard::Keyboard8, Keyboard::F8), false),
    slot(ActionBinding::double(Keyboard::Keyboard9, Keyboard::F9), false),
];
