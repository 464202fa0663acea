//! Gesture dispatch.
//!
//! The manager owns one counter per configured slot and decides when each
//! slot's sequence finalizes: when the key has been up for the tap term with
//! no further press, when a press has lasted the hold term with no further
//! tap, or immediately when any other key activates.  On finalize it emits
//! the bound effect for the classified verdict; on reset it runs that
//! verdict's clear and wipes the counter.  Per slot, emits and clears
//! strictly alternate.
//!
//! Everything here runs to completion on the caller's thread.  The host
//! environment delivers all events and ticks serially from its scan loop, so
//! no slot is ever touched from two places at once.

use arrayvec::ArrayVec;

use crate::action::ActionBinding;
use crate::counter::TapCounter;
use crate::log::{info, warn};
use crate::{ActionQueue, KeyEvent};

/// The most slots a manager will carry.
pub const MAX_SLOTS: usize = 8;

/// Static per-slot configuration.
pub struct SlotConfig {
    /// What each verdict does.
    pub binding: ActionBinding,
    /// Ticks the key may stay up before the sequence finalizes as a tap.
    pub tap_term: u16,
    /// Ticks a press may last before it finalizes as a hold.
    pub hold_term: u16,
    /// Classify four or more taps as Successive instead of saturating at
    /// the triple tier.
    pub extended: bool,
}

struct TapSlot {
    id: u8,
    counter: TapCounter,
    config: &'static SlotConfig,
}

/// Owns and drives all tap dance slots.
pub struct TapDanceManager {
    slots: ArrayVec<TapSlot, MAX_SLOTS>,
}

impl TapDanceManager {
    pub fn new(configs: &'static [SlotConfig]) -> Self {
        let mut slots = ArrayVec::new();
        for (id, config) in configs.iter().enumerate() {
            slots.push(TapSlot {
                id: id as u8,
                counter: TapCounter::default(),
                config,
            });
        }
        TapDanceManager { slots }
    }

    /// Handle a press or release on one of the tap dance slots.
    pub fn handle_event(&mut self, event: KeyEvent, actions: &mut dyn ActionQueue) {
        let id = event.key() as usize;
        if id >= self.slots.len() {
            warn!("tapdance: event for unconfigured slot {}", event.key());
            return;
        }
        if event.is_press() {
            // A press anywhere interrupts every other open sequence.
            self.interrupt_except(Some(id), actions);
            self.slots[id].press(actions);
        } else {
            self.slots[id].release(actions);
        }
    }

    /// Some key outside the tap dance slots went down.  Open sequences
    /// finalize immediately, biased to their tap verdicts.
    pub fn interrupt(&mut self, actions: &mut dyn ActionQueue) {
        self.interrupt_except(None, actions);
    }

    /// Advance time one scan interval.  This can finalize sequences without
    /// any discrete key event, so it must be called even when idle.
    pub fn tick(&mut self, actions: &mut dyn ActionQueue) {
        for slot in &mut self.slots {
            slot.tick(actions);
        }
    }

    fn interrupt_except(&mut self, skip: Option<usize>, actions: &mut dyn ActionQueue) {
        for slot in &mut self.slots {
            if skip != Some(slot.id as usize) {
                slot.interrupt(actions);
            }
        }
    }
}

impl TapSlot {
    fn press(&mut self, actions: &mut dyn ActionQueue) {
        if self.counter.verdict().is_some() {
            // A press can only arrive here if the environment lost the
            // release that should have ended the last gesture.
            debug_assert!(false, "press on slot with outstanding verdict");
            self.reset(actions);
        }
        self.counter.on_press();
    }

    fn release(&mut self, actions: &mut dyn ActionQueue) {
        if self.counter.verdict().is_some() {
            // The sequence finalized while the key was still down (a hold,
            // or an interrupted press).  The release ends it.
            self.reset(actions);
        } else {
            self.counter.on_release();
        }
    }

    fn interrupt(&mut self, actions: &mut dyn ActionQueue) {
        if !self.counter.is_open() {
            return;
        }
        self.counter.mark_interrupted();
        self.finalize(actions);
    }

    fn tick(&mut self, actions: &mut dyn ActionQueue) {
        if !self.counter.is_open() {
            return;
        }
        self.counter.bump_age();
        let expired = if self.counter.pressed() {
            self.counter.age() >= self.config.hold_term
        } else {
            self.counter.age() >= self.config.tap_term
        };
        if expired {
            self.finalize(actions);
        }
    }

    /// Fix the verdict and run its emit effect, exactly once per sequence.
    fn finalize(&mut self, actions: &mut dyn ActionQueue) {
        if self.counter.verdict().is_some() {
            debug_assert!(false, "finalize without intervening reset");
            return;
        }
        let verdict = self.counter.classify(self.config.extended);
        self.counter.set_verdict(verdict);
        info!("tapdance: slot {} finalize {:?}", self.id, verdict);
        self.config.binding.effect(verdict).emit(actions);
        // A sequence whose key is already up has nothing left to wait for;
        // its clear runs in the same step.
        if !self.counter.pressed() {
            self.reset(actions);
        }
    }

    /// Run the clear effect for the verdict that was stored, then wipe the
    /// counter.  Safe with no verdict outstanding.
    fn reset(&mut self, actions: &mut dyn ActionQueue) {
        if let Some(verdict) = self.counter.verdict() {
            info!("tapdance: slot {} reset {:?}", self.id, verdict);
            self.config.binding.effect(verdict).clear(actions);
        }
        self.counter.reset();
    }
}
