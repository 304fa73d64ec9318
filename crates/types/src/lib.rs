//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scorer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (frame logic, scoring fold, scorecard rendering, reports).
//!
//! # Game Dimensions
//!
//! Standard ten-pin dimensions:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `REGULAR_FRAMES` | 9 | Two-roll frames before the final frame |
//! | `MAX_ROLLS_PER_FRAME` | 3 | Rolls available in the final frame |
//! | `MAX_ROLLS_PER_GAME` | 21 | Nine open frames plus a full final frame |
//! | `PERFECT_SCORE` | 300 | Twelve strikes |
//!
//! # Examples
//!
//! ```
//! use bowling_score_types::{FrameOutcome, Pin, PIN_COUNT};
//!
//! // Pins are numbered 1 to 10 and indexed 0 to 9
//! assert_eq!(Pin::Seven.index(), 6);
//! assert_eq!(Pin::from_index(9), Some(Pin::Ten));
//! assert_eq!(Pin::ALL.len(), PIN_COUNT as usize);
//!
//! // Outcomes carry the pins the frame knocked down itself
//! assert_eq!(FrameOutcome::Spare { first: 7 }.pins(), 10);
//! assert_eq!(FrameOutcome::SpareWithBonus { first: 4, bonus: 7 }.pins(), 17);
//! ```

/// Pins in a full rack (10)
pub const PIN_COUNT: u8 = 10;

/// Frames in a game (10)
pub const FRAME_COUNT: usize = 10;

/// Regular two-roll frames that precede the final frame (9)
pub const REGULAR_FRAMES: usize = FRAME_COUNT - 1;

/// Rolls available in the final frame (3)
pub const MAX_ROLLS_PER_FRAME: usize = 3;

/// Upper bound on rolls in one game (21)
pub const MAX_ROLLS_PER_GAME: usize = REGULAR_FRAMES * 2 + MAX_ROLLS_PER_FRAME;

/// Score of a perfect game (300)
pub const PERFECT_SCORE: u16 = 300;


/// The ten pins of a rack
///
/// Numbered the way a scorer reads the triangle, front pin first:
///
/// ```text
///  7   8   9   10
///    4   5   6
///      2   3
///        1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pin {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Pin {
    /// All pins in index order
    pub const ALL: [Pin; PIN_COUNT as usize] = [
        Pin::One,
        Pin::Two,
        Pin::Three,
        Pin::Four,
        Pin::Five,
        Pin::Six,
        Pin::Seven,
        Pin::Eight,
        Pin::Nine,
        Pin::Ten,
    ];

    /// Zero-based index (pin one is index 0)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pin for a zero-based index
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_score_types::Pin;
    ///
    /// assert_eq!(Pin::from_index(0), Some(Pin::One));
    /// assert_eq!(Pin::from_index(4), Some(Pin::Five));
    /// assert_eq!(Pin::from_index(10), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// What a frame produced, in the shape the scoring fold consumes
///
/// Regular frames report `Open`, `Strike` or `Spare`. The final frame reports
/// `Open`, `SpareWithBonus`, `StrikeWithBonus` or `ThreeStrikes`.
///
/// A frame that has not finished reports `Open` with the pins so far; a frame
/// that was never rolled reports `Open { total: 0, first: 0, second: 0 }`
/// (the `Default`), which scores nothing and settles no bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameOutcome {
    /// Fewer than ten pins over the frame's rolls
    Open { total: u8, first: u8, second: u8 },
    /// All ten on the first roll of a regular frame
    Strike,
    /// All ten over two rolls of a regular frame
    Spare { first: u8 },
    /// Final frame: spare then one bonus roll
    SpareWithBonus { first: u8, bonus: u8 },
    /// Final frame: strike then two bonus rolls that are not both strikes
    StrikeWithBonus { second: u8, bonus: u8 },
    /// Final frame: three strikes
    ThreeStrikes,
}

impl Default for FrameOutcome {
    fn default() -> Self {
        FrameOutcome::Open {
            total: 0,
            first: 0,
            second: 0,
        }
    }
}

impl FrameOutcome {
    /// Pins knocked down by the frame's own rolls (bonus owed to earlier frames excluded)
    pub fn pins(&self) -> u16 {
        let pins = match *self {
            FrameOutcome::Open { total, .. } => total,
            FrameOutcome::Strike | FrameOutcome::Spare { .. } => PIN_COUNT,
            FrameOutcome::SpareWithBonus { bonus, .. } => PIN_COUNT + bonus,
            FrameOutcome::StrikeWithBonus { second, bonus } => PIN_COUNT + second + bonus,
            FrameOutcome::ThreeStrikes => PIN_COUNT * 3,
        };
        pins as u16
    }

    /// Whether the frame opened with a strike
    pub fn is_strike(&self) -> bool {
        matches!(
            self,
            FrameOutcome::Strike
                | FrameOutcome::StrikeWithBonus { .. }
                | FrameOutcome::ThreeStrikes
        )
    }

    /// Whether the frame was a spare
    pub fn is_spare(&self) -> bool {
        matches!(
            self,
            FrameOutcome::Spare { .. } | FrameOutcome::SpareWithBonus { .. }
        )
    }
}
