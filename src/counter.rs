//! Per-slot tap counting and gesture classification.
//!
//! A sequence opens on the first press of a slot's key and stays open while
//! further taps arrive within the slot's timing window.  The counter itself
//! never decides when the window has closed; it only records what it has
//! seen.  The dispatcher asks it to classify once a timeout expires or
//! another key interrupts the sequence.

/// The classified outcome of a finalized tap sequence.
///
/// Single/Double/Triple cover one to three taps.  Successive covers four or
/// more on slots configured with the extended gesture set; slots without it
/// classify four or more the same as three.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    SingleTap,
    SingleHold,
    DoubleTap,
    DoubleHold,
    TripleTap,
    TripleHold,
    SuccessiveTap,
    SuccessiveHold,
    /// A sequence that matches no tier (an empty one, for instance).  Both
    /// its effects are no-ops.
    Unclassified,
}

/// Mutable run state for one tap dance slot.
#[derive(Default)]
pub struct TapCounter {
    /// Taps observed in the still-open sequence.
    count: u8,
    /// The physical key is currently down.
    pressed: bool,
    /// Some other key activated while this sequence was open.
    interrupted: bool,
    /// The verdict fixed by finalize, cleared again by reset.
    verdict: Option<Verdict>,
    /// Ticks since the last press or release edge.
    age: u16,
}

impl TapCounter {
    /// Record a press.  Opens a new sequence if none is open, otherwise
    /// counts another tap.
    pub fn on_press(&mut self) {
        self.count = self.count.saturating_add(1);
        self.pressed = true;
        self.age = 0;
    }

    /// Record a release.  This never finalizes by itself; it just starts the
    /// window in which a further tap may still arrive.
    pub fn on_release(&mut self) {
        self.pressed = false;
        self.age = 0;
    }

    /// Some other key went down while this sequence was open.  Interrupted
    /// sequences classify as taps even while the key is still held.
    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// A sequence is open when taps have been seen and no verdict has been
    /// fixed yet.
    pub fn is_open(&self) -> bool {
        self.count > 0 && self.verdict.is_none()
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    /// Advance the slot's clock one scan tick.
    pub fn bump_age(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn set_verdict(&mut self, verdict: Verdict) {
        self.verdict = Some(verdict);
    }

    /// Classify the sequence as it stands.  Pure over (count, pressed,
    /// interrupted); a tap verdict wins whenever the sequence was interrupted
    /// or the key is already up, a hold only while the key is still down
    /// undisturbed.
    pub fn classify(&self, extended: bool) -> Verdict {
        match (self.count, self.interrupted || !self.pressed) {
            (0, _) => Verdict::Unclassified,
            (1, true) => Verdict::SingleTap,
            (1, false) => Verdict::SingleHold,
            (2, true) => Verdict::DoubleTap,
            (2, false) => Verdict::DoubleHold,
            (3, true) => Verdict::TripleTap,
            (3, false) => Verdict::TripleHold,
            (_, true) if extended => Verdict::SuccessiveTap,
            (_, false) if extended => Verdict::SuccessiveHold,
            // Without the extended set, the count saturates at the triple
            // tier even though the stored integer keeps growing.
            (_, true) => Verdict::TripleTap,
            (_, false) => Verdict::TripleHold,
        }
    }

    /// Clear everything for the next sequence.  Idempotent.
    pub fn reset(&mut self) {
        *self = TapCounter::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(count: u8, pressed: bool, interrupted: bool) -> TapCounter {
        let mut c = TapCounter::default();
        for _ in 0..count {
            c.on_press();
            c.on_release();
        }
        if pressed {
            // Make the last press still held.
            c.pressed = true;
        }
        if interrupted {
            c.mark_interrupted();
        }
        c
    }

    #[test]
    fn classify_is_total_and_deterministic() {
        use Verdict::*;
        for (count, tap_verdict, hold_verdict) in [
            (1, SingleTap, SingleHold),
            (2, DoubleTap, DoubleHold),
            (3, TripleTap, TripleHold),
        ] {
            for interrupted in [false, true] {
                for pressed in [false, true] {
                    let c = counter(count, pressed, interrupted);
                    let expect = if interrupted || !pressed {
                        tap_verdict
                    } else {
                        hold_verdict
                    };
                    assert_eq!(c.classify(false), expect);
                    assert_eq!(c.classify(true), expect);
                    // Same inputs, same answer.
                    assert_eq!(c.classify(true), c.classify(true));
                }
            }
        }
    }

    #[test]
    fn four_or_more_saturates_or_extends() {
        for count in [4, 5, 9] {
            let c = counter(count, false, false);
            assert_eq!(c.classify(true), Verdict::SuccessiveTap);
            assert_eq!(c.classify(false), Verdict::TripleTap);

            let c = counter(count, true, false);
            assert_eq!(c.classify(true), Verdict::SuccessiveHold);
            assert_eq!(c.classify(false), Verdict::TripleHold);
        }
    }

    #[test]
    fn empty_sequence_is_unclassified() {
        let c = TapCounter::default();
        assert_eq!(c.classify(false), Verdict::Unclassified);
        assert_eq!(c.classify(true), Verdict::Unclassified);
    }

    #[test]
    fn interrupt_overrides_hold() {
        let mut c = TapCounter::default();
        c.on_press();
        c.mark_interrupted();
        // Still physically down, but interrupted forces the tap branch.
        assert_eq!(c.classify(false), Verdict::SingleTap);
    }

    #[test]
    fn reset_clears_verdict_memory() {
        let mut c = counter(3, false, true);
        c.set_verdict(c.classify(false));
        assert_eq!(c.verdict(), Some(Verdict::TripleTap));

        c.reset();
        assert_eq!(c.verdict(), None);
        assert!(!c.is_open());

        // A fresh sequence classifies from scratch.
        c.on_press();
        assert_eq!(c.classify(false), Verdict::SingleHold);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut c = counter(2, true, true);
        c.set_verdict(Verdict::DoubleTap);
        c.reset();
        let after_once = (c.count, c.pressed, c.interrupted, c.verdict, c.age);
        c.reset();
        let after_twice = (c.count, c.pressed, c.interrupted, c.verdict, c.age);
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn age_tracks_edges() {
        let mut c = TapCounter::default();
        c.on_press();
        c.bump_age();
        c.bump_age();
        assert_eq!(c.age(), 2);
        c.on_release();
        assert_eq!(c.age(), 0);
        c.on_press();
        assert_eq!(c.age(), 0);
        assert!(c.is_open());
    }
}
