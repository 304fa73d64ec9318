//! Pins module - the rack a frame rolls against
//!
//! Frames only see a rack through the [`PinRack`] trait, so the frame state
//! machines and the scoring fold can be driven by any rack that can report
//! counts. [`PinSet`] is the concrete ten-pin rack.
//! A pin knocked down stays down until [`PinRack::reset`].

use crate::types::{Pin, PIN_COUNT};

/// Capability a frame needs from a pin rack
pub trait PinRack {
    /// Knock a single pin down
    fn knock_down(&mut self, pin: Pin);

    /// Check whether a pin is down
    fn is_down(&self, pin: Pin) -> bool;

    /// Number of pins down (0-10)
    fn count_down(&self) -> u8;

    /// Stand every pin back up
    fn reset(&mut self);

    /// Knock down every pin that is down in `other` (union of downed pins)
    fn merge_downed_from(&mut self, other: &Self);

    /// Check whether a pin is standing
    fn is_up(&self, pin: Pin) -> bool {
        !self.is_down(pin)
    }

    /// Number of pins standing (0-10)
    fn count_up(&self) -> u8 {
        PIN_COUNT - self.count_down()
    }

    /// Check whether every pin is standing
    fn all_up(&self) -> bool {
        self.count_down() == 0
    }

    /// Check whether every pin is down
    fn all_down(&self) -> bool {
        self.count_down() == PIN_COUNT
    }
}

/// Mask with a bit set for each of the ten pins
const FULL_RACK: u16 = (1 << PIN_COUNT) - 1;

/// Ten-pin rack stored as a bitmask of standing pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinSet {
    /// Bit `i` set means pin `i` is standing
    standing: u16,
}

impl PinSet {
    /// Create a rack with every pin standing
    pub fn new() -> Self {
        Self {
            standing: FULL_RACK,
        }
    }

    /// Create a rack with the first `n` pins (by index) knocked down
    ///
    /// `n` is clamped to the rack size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_score_core::{PinRack, PinSet};
    ///
    /// assert_eq!(PinSet::with_first_down(4).count_down(), 4);
    /// assert!(PinSet::with_first_down(12).all_down());
    /// ```
    pub fn with_first_down(n: u8) -> Self {
        Pin::ALL.iter().take(n as usize).copied().collect()
    }

    #[inline(always)]
    fn bit(pin: Pin) -> u16 {
        1 << pin.index()
    }
}

impl Default for PinSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Pin> for PinSet {
    /// Collect the pins that were knocked down into a rack
    fn from_iter<I: IntoIterator<Item = Pin>>(iter: I) -> Self {
        let mut rack = PinSet::new();
        for pin in iter {
            rack.knock_down(pin);
        }
        rack
    }
}

impl PinRack for PinSet {
    fn knock_down(&mut self, pin: Pin) {
        self.standing &= !Self::bit(pin);
    }

    fn is_down(&self, pin: Pin) -> bool {
        self.standing & Self::bit(pin) == 0
    }

    fn count_down(&self) -> u8 {
        PIN_COUNT - self.standing.count_ones() as u8
    }

    fn reset(&mut self) {
        self.standing = FULL_RACK;
    }

    fn merge_downed_from(&mut self, other: &Self) {
        self.standing &= other.standing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rack_all_up() {
        let rack = PinSet::new();
        assert!(rack.all_up());
        assert!(!rack.all_down());
        assert_eq!(rack.count_up(), 10);
        assert_eq!(rack.count_down(), 0);
        for pin in Pin::ALL {
            assert!(rack.is_up(pin));
        }
    }

    #[test]
    fn test_knock_down_is_sticky() {
        let mut rack = PinSet::new();
        rack.knock_down(Pin::Five);
        rack.knock_down(Pin::Five);
        assert!(rack.is_down(Pin::Five));
        assert!(rack.is_up(Pin::One));
        assert_eq!(rack.count_down(), 1);
        assert_eq!(rack.count_up(), 9);
    }

    #[test]
    fn test_reset_stands_everything() {
        let mut rack = PinSet::with_first_down(10);
        assert!(rack.all_down());
        rack.reset();
        assert!(rack.all_up());
    }

    #[test]
    fn test_merge_is_union_of_downed() {
        let mut rack: PinSet = [Pin::One, Pin::Two, Pin::Three].into_iter().collect();
        let roll: PinSet = [Pin::Three, Pin::Seven].into_iter().collect();

        rack.merge_downed_from(&roll);

        assert_eq!(rack.count_down(), 4);
        assert!(rack.is_down(Pin::Seven));
        // The roll itself is untouched
        assert_eq!(roll.count_down(), 2);
    }

    #[test]
    fn test_merge_with_standing_rack_is_noop() {
        let mut rack = PinSet::with_first_down(6);
        rack.merge_downed_from(&PinSet::new());
        assert_eq!(rack, PinSet::with_first_down(6));
    }
}
