//! Frame module - the per-frame turn state machines
//!
//! Frames 1-9 are [`Frame`]s (up to two rolls), frame 10 is a [`FinalFrame`]
//! (up to three rolls). Each frame owns its own rack and merges every roll
//! into it, so the rack always holds the pins down so far in the frame and
//! individual roll counts are derived by subtraction.
//!
//! [`GameFrame`] dispatches over the two kinds so a sequence can hold them in
//! one array.

use arrayvec::ArrayVec;

use crate::error::BowlingError;
use crate::pins::{PinRack, PinSet};
use crate::types::{FrameOutcome, MAX_ROLLS_PER_FRAME, PIN_COUNT};

/// Individual roll counts recorded by a frame
pub type Rolls = ArrayVec<u8, MAX_ROLLS_PER_FRAME>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    NotStarted,
    AfterFirst,
    Done,
}

/// A regular frame (frames 1-9)
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<R = PinSet> {
    pins: R,
    turn: Turn,
    first: u8,
    second: u8,
}

impl<R: PinRack> Frame<R> {
    /// Create a frame over a rack (expected to start with every pin up)
    pub fn new(pins: R) -> Self {
        Self {
            pins,
            turn: Turn::NotStarted,
            first: 0,
            second: 0,
        }
    }

    /// Record a roll
    ///
    /// The roll's downed pins are merged into the frame's rack.
    /// Returns [`BowlingError::FrameAlreadyEnded`] if the turn is over.
    pub fn bowled(&mut self, roll: &R) -> Result<(), BowlingError> {
        if self.turn_ended() {
            return Err(BowlingError::FrameAlreadyEnded);
        }

        self.pins.merge_downed_from(roll);
        match self.turn {
            Turn::NotStarted => {
                self.turn = Turn::AfterFirst;
                self.first = self.pins.count_down();
            }
            Turn::AfterFirst => {
                self.turn = Turn::Done;
                self.second = self.pins.count_down().saturating_sub(self.first);
            }
            Turn::Done => unreachable!("finished frames are rejected above"),
        }
        Ok(())
    }

    /// Whether the frame takes no more rolls
    pub fn turn_ended(&self) -> bool {
        match self.turn {
            Turn::NotStarted => false,
            Turn::AfterFirst => self.pins.all_down(),
            Turn::Done => true,
        }
    }

    /// Outcome so far (final once the turn has ended)
    pub fn score(&self) -> FrameOutcome {
        let down = self.pins.count_down();
        if down == PIN_COUNT {
            if self.turn == Turn::Done {
                FrameOutcome::Spare { first: self.first }
            } else {
                FrameOutcome::Strike
            }
        } else {
            FrameOutcome::Open {
                total: down,
                first: self.first,
                second: self.second,
            }
        }
    }

    /// Roll counts recorded so far
    pub fn rolls(&self) -> Rolls {
        let mut rolls = Rolls::new();
        if self.turn != Turn::NotStarted {
            rolls.push(self.first);
        }
        if self.turn == Turn::Done {
            rolls.push(self.second);
        }
        rolls
    }

    /// Whether at least one roll has been recorded
    pub fn started(&self) -> bool {
        self.turn != Turn::NotStarted
    }

    /// The frame's rack (pins down so far)
    pub fn pins(&self) -> &R {
        &self.pins
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinalTurn {
    NotStarted,
    AfterFirst,
    AfterSecond,
    Done,
}

/// The tenth frame
///
/// A strike on the first roll, or a spare over the first two, earns a third
/// roll. The rack is stood back up after a first-roll strike and again before
/// the third roll whenever it reads all down, so each bonus roll is measured
/// against the pins actually standing.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalFrame<R = PinSet> {
    pins: R,
    turn: FinalTurn,
    first: u8,
    second: u8,
    bonus: u8,
}

impl<R: PinRack> FinalFrame<R> {
    /// Create the final frame over a rack (expected to start with every pin up)
    pub fn new(pins: R) -> Self {
        Self {
            pins,
            turn: FinalTurn::NotStarted,
            first: 0,
            second: 0,
            bonus: 0,
        }
    }

    /// Record a roll
    ///
    /// Returns [`BowlingError::FrameAlreadyEnded`] if the turn is over.
    pub fn bowled(&mut self, roll: &R) -> Result<(), BowlingError> {
        if self.turn_ended() {
            return Err(BowlingError::FrameAlreadyEnded);
        }

        match self.turn {
            FinalTurn::NotStarted => {
                self.pins.merge_downed_from(roll);
                self.turn = FinalTurn::AfterFirst;
                self.first = self.pins.count_down();
            }
            FinalTurn::AfterFirst => {
                let before = if self.first == PIN_COUNT {
                    self.pins.reset();
                    0
                } else {
                    self.first
                };
                self.pins.merge_downed_from(roll);
                self.turn = FinalTurn::AfterSecond;
                self.second = self.pins.count_down().saturating_sub(before);
            }
            FinalTurn::AfterSecond => {
                if self.pins.all_down() {
                    self.pins.reset();
                }
                let before = self.pins.count_down();
                self.pins.merge_downed_from(roll);
                self.turn = FinalTurn::Done;
                self.bonus = self.pins.count_down().saturating_sub(before);
            }
            FinalTurn::Done => unreachable!("finished frames are rejected above"),
        }
        Ok(())
    }

    /// Whether the frame takes no more rolls
    ///
    /// An open tenth frame stops after two rolls; a strike or spare gets three.
    pub fn turn_ended(&self) -> bool {
        match self.turn {
            FinalTurn::NotStarted | FinalTurn::AfterFirst => false,
            FinalTurn::AfterSecond => self.first + self.second < PIN_COUNT,
            FinalTurn::Done => true,
        }
    }

    /// Outcome so far
    ///
    /// Until the bonus roll (if any) is in, this is `Open` with the pins of the
    /// first two rolls, which may transiently exceed ten.
    pub fn score(&self) -> FrameOutcome {
        if self.turn != FinalTurn::Done {
            return FrameOutcome::Open {
                total: self.first + self.second,
                first: self.first,
                second: self.second,
            };
        }

        if self.first < PIN_COUNT && self.first + self.second == PIN_COUNT {
            FrameOutcome::SpareWithBonus {
                first: self.first,
                bonus: self.bonus,
            }
        } else if self.second == PIN_COUNT && self.bonus == PIN_COUNT {
            FrameOutcome::ThreeStrikes
        } else {
            FrameOutcome::StrikeWithBonus {
                second: self.second,
                bonus: self.bonus,
            }
        }
    }

    /// Roll counts recorded so far
    pub fn rolls(&self) -> Rolls {
        let mut rolls = Rolls::new();
        let recorded = match self.turn {
            FinalTurn::NotStarted => 0,
            FinalTurn::AfterFirst => 1,
            FinalTurn::AfterSecond => 2,
            FinalTurn::Done => 3,
        };
        for count in [self.first, self.second, self.bonus].into_iter().take(recorded) {
            rolls.push(count);
        }
        rolls
    }

    /// Whether at least one roll has been recorded
    pub fn started(&self) -> bool {
        self.turn != FinalTurn::NotStarted
    }

    /// The frame's rack (pins down against the current rack)
    pub fn pins(&self) -> &R {
        &self.pins
    }
}

/// Either kind of frame, so ten of them fit in one array
#[derive(Debug, Clone, PartialEq)]
pub enum GameFrame<R = PinSet> {
    Regular(Frame<R>),
    Final(FinalFrame<R>),
}

impl<R: PinRack> GameFrame<R> {
    pub fn bowled(&mut self, roll: &R) -> Result<(), BowlingError> {
        match self {
            GameFrame::Regular(frame) => frame.bowled(roll),
            GameFrame::Final(frame) => frame.bowled(roll),
        }
    }

    pub fn turn_ended(&self) -> bool {
        match self {
            GameFrame::Regular(frame) => frame.turn_ended(),
            GameFrame::Final(frame) => frame.turn_ended(),
        }
    }

    pub fn score(&self) -> FrameOutcome {
        match self {
            GameFrame::Regular(frame) => frame.score(),
            GameFrame::Final(frame) => frame.score(),
        }
    }

    pub fn rolls(&self) -> Rolls {
        match self {
            GameFrame::Regular(frame) => frame.rolls(),
            GameFrame::Final(frame) => frame.rolls(),
        }
    }

    pub fn started(&self) -> bool {
        match self {
            GameFrame::Regular(frame) => frame.started(),
            GameFrame::Final(frame) => frame.started(),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameFrame::Final(_))
    }
}
