//! Verdict to effect bindings.
//!
//! Each slot carries an immutable table mapping every verdict to an effect.
//! An effect is one of a small closed set of kinds, and each kind knows both
//! how to emit itself when a gesture finalizes and how to undo itself when
//! the gesture resets.  That keeps the dispatcher exhaustive: there is no
//! open-ended callback registration, just data.

use crate::counter::Verdict;
use crate::typer;
use crate::{ActionQueue, KeyAction, Keyboard, Mods};

/// One effect a finalized gesture can have.
#[derive(Clone, Copy)]
pub enum Effect {
    /// Nothing on emit, nothing on clear.  Intentionally unbound verdicts
    /// and unclassifiable sequences land here.
    None,
    /// Hold a keycode down; clear releases it.  The key acts like a plain
    /// key for as long as the gesture is outstanding.
    Key(Keyboard, Mods),
    /// Press and release a keycode immediately.  Nothing to clear.
    Tap(Keyboard, Mods),
    /// Type a literal string.  Nothing to clear; the text is already sent.
    Literal(&'static str),
    /// Activate a modifier set; clear deactivates it.
    Modifiers(Mods),
}

impl Effect {
    /// Run the finalize side of the effect.
    pub fn emit(self, actions: &mut dyn ActionQueue) {
        match self {
            Effect::None => (),
            Effect::Key(code, mods) => actions.push(KeyAction::KeyPress(code, mods)),
            Effect::Tap(code, mods) => {
                actions.push(KeyAction::KeyPress(code, mods));
                actions.push(KeyAction::KeyRelease(code));
            }
            Effect::Literal(text) => typer::type_str(text, actions),
            Effect::Modifiers(mods) => actions.push(KeyAction::ModSet(mods)),
        }
    }

    /// Undo whatever emit left active.
    pub fn clear(self, actions: &mut dyn ActionQueue) {
        match self {
            Effect::Key(code, _) => actions.push(KeyAction::KeyRelease(code)),
            Effect::Modifiers(mods) => actions.push(KeyAction::ModClear(mods)),
            // Taps and literals finish the moment they are sent.
            Effect::None | Effect::Tap(..) | Effect::Literal(_) => (),
        }
    }
}

/// Immutable per-slot table of effects, indexed by verdict.  Built once in
/// the configuration tables and never touched afterwards.
pub struct ActionBinding {
    effects: [Effect; 8],
}

impl ActionBinding {
    /// A full table, ordered SingleTap, SingleHold, DoubleTap, DoubleHold,
    /// TripleTap, TripleHold, SuccessiveTap, SuccessiveHold.
    pub const fn new(effects: [Effect; 8]) -> Self {
        ActionBinding { effects }
    }

    /// Same effect for the tap and hold verdict of each tier.
    pub const fn tiered(
        single: Effect,
        double: Effect,
        triple: Effect,
        successive: Effect,
    ) -> Self {
        ActionBinding::new([
            single, single, double, double, triple, triple, successive, successive,
        ])
    }

    /// The reduced two-entry form: one keycode for a single press, another
    /// for two or more.
    pub const fn double(first: Keyboard, rest: Keyboard) -> Self {
        let a = Effect::Key(first, Mods::empty());
        let b = Effect::Key(rest, Mods::empty());
        ActionBinding::tiered(a, b, b, b)
    }

    /// Look up the effect for a verdict.  Unclassified sequences, like
    /// unbound entries, resolve to a no-op rather than an error.
    pub fn effect(&self, verdict: Verdict) -> Effect {
        match verdict {
            Verdict::Unclassified => Effect::None,
            _ => self.effects[verdict as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    struct Queue(Vec<KeyAction>);

    impl ActionQueue for Queue {
        fn push(&mut self, action: KeyAction) {
            self.0.push(action);
        }
    }

    #[test]
    fn key_effect_pairs_press_and_release() {
        let mut q = Queue(Vec::new());
        let e = Effect::Key(Keyboard::Apostrophe, Mods::SHIFT);
        e.emit(&mut q);
        e.clear(&mut q);
        assert_eq!(
            q.0,
            vec![
                KeyAction::KeyPress(Keyboard::Apostrophe, Mods::SHIFT),
                KeyAction::KeyRelease(Keyboard::Apostrophe),
            ]
        );
    }

    #[test]
    fn tap_and_literal_have_nothing_to_clear() {
        let mut q = Queue(Vec::new());
        Effect::Tap(Keyboard::X, Mods::all()).clear(&mut q);
        Effect::Literal("```").clear(&mut q);
        Effect::None.emit(&mut q);
        Effect::None.clear(&mut q);
        assert!(q.0.is_empty());
    }

    #[test]
    fn double_binding_saturates() {
        let b = ActionBinding::double(Keyboard::Keyboard5, Keyboard::F5);
        let mut q = Queue(Vec::new());
        b.effect(Verdict::SingleTap).emit(&mut q);
        b.effect(Verdict::DoubleHold).emit(&mut q);
        b.effect(Verdict::SuccessiveTap).emit(&mut q);
        assert_eq!(
            q.0,
            vec![
                KeyAction::KeyPress(Keyboard::Keyboard5, Mods::empty()),
                KeyAction::KeyPress(Keyboard::F5, Mods::empty()),
                KeyAction::KeyPress(Keyboard::F5, Mods::empty()),
            ]
        );
    }

    #[test]
    fn unclassified_is_a_noop() {
        let b = ActionBinding::double(Keyboard::A, Keyboard::B);
        let mut q = Queue(Vec::new());
        b.effect(Verdict::Unclassified).emit(&mut q);
        b.effect(Verdict::Unclassified).clear(&mut q);
        assert!(q.0.is_empty());
    }
}
