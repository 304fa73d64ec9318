//! Frame sequence module - routes rolls through the ten frames of a game
//!
//! The sequence owns nine regular frames and the final frame in fixed order.
//! Each roll goes to the active frame; when that frame's turn ends the
//! sequence moves on. The score can be read at any point and folds every
//! frame's outcome through [`ScoreFold`].

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::error::BowlingError;
use crate::frame::{FinalFrame, Frame, GameFrame};
use crate::pins::{PinRack, PinSet};
use crate::scoring::ScoreFold;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{FrameOutcome, FRAME_COUNT, MAX_ROLLS_PER_GAME, REGULAR_FRAMES};

/// A single game: ten frames and the index of the one being bowled
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence<R = PinSet> {
    frames: [GameFrame<R>; FRAME_COUNT],
    /// Active frame index; `FRAME_COUNT` once the game is over
    current: usize,
}

impl FrameSequence<PinSet> {
    /// Create a game over standard ten-pin racks
    pub fn new() -> Self {
        Self::with_racks(PinSet::new)
    }
}

impl Default for FrameSequence<PinSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PinRack> FrameSequence<R> {
    /// Create a game whose frames each get a rack from `make_rack`
    pub fn with_racks(mut make_rack: impl FnMut() -> R) -> Self {
        let frames = std::array::from_fn(|i| {
            if i < REGULAR_FRAMES {
                GameFrame::Regular(Frame::new(make_rack()))
            } else {
                GameFrame::Final(FinalFrame::new(make_rack()))
            }
        });
        Self { frames, current: 0 }
    }

    /// Record a roll in the active frame
    ///
    /// Errors from the frame are returned unchanged. Rolling after the last
    /// frame has ended returns [`BowlingError::GameEnded`].
    pub fn roll(&mut self, pins: &R) -> Result<(), BowlingError> {
        let index = self.current;
        let frame = self
            .frames
            .get_mut(index)
            .ok_or(BowlingError::GameEnded)?;

        frame.bowled(pins)?;
        trace!(frame = index + 1, rolls = ?frame.rolls(), "roll recorded");

        if frame.turn_ended() {
            debug!(frame = index + 1, outcome = ?frame.score(), "frame complete");
            self.current += 1;
        }
        Ok(())
    }

    /// Whether all ten frames are complete
    pub fn ended(&self) -> bool {
        self.current == FRAME_COUNT
    }

    /// Score so far (final once [`ended`](Self::ended))
    pub fn score(&self) -> u16 {
        let mut fold = ScoreFold::new();
        for frame in &self.frames {
            fold.apply(frame.score());
        }
        fold.total()
    }

    /// Index of the active frame (0-9), or 10 once the game is over
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Frame at `index` (0-9)
    pub fn frame(&self, index: usize) -> Option<&GameFrame<R>> {
        self.frames.get(index)
    }

    /// Outcome of every frame, in order
    pub fn outcomes(&self) -> [FrameOutcome; FRAME_COUNT] {
        std::array::from_fn(|i| self.frames[i].score())
    }

    /// Cumulative scorecard total for each frame
    ///
    /// A frame's entry is `None` until the frame is finished and every bonus
    /// roll it is owed has been bowled; later frames stay `None` behind it.
    /// Once the game has ended the last entry equals [`score`](Self::score).
    pub fn card_totals(&self) -> [Option<u16>; FRAME_COUNT] {
        let rolls: ArrayVec<u8, MAX_ROLLS_PER_GAME> =
            self.frames.iter().flat_map(|frame| frame.rolls()).collect();

        let mut totals = [None; FRAME_COUNT];
        let mut cumulative = 0u16;
        let mut next = 0usize;
        for (i, frame) in self.frames.iter().enumerate() {
            if !frame.turn_ended() {
                break;
            }
            let own = frame.rolls();
            next += own.len();
            let owed = match frame.score() {
                FrameOutcome::Strike => 2,
                FrameOutcome::Spare { .. } => 1,
                _ => 0,
            };
            let Some(bonus) = rolls.get(next..next + owed) else {
                break;
            };
            cumulative += own.iter().chain(bonus).map(|&r| r as u16).sum::<u16>();
            totals[i] = Some(cumulative);
        }
        totals
    }

    /// Read model of the whole game for observers
    pub fn snapshot(&self) -> GameSnapshot {
        let totals = self.card_totals();
        let frames = std::array::from_fn(|i| {
            let frame = &self.frames[i];
            FrameSnapshot {
                rolls: frame.rolls(),
                outcome: frame.started().then(|| frame.score()),
                complete: frame.turn_ended(),
                running: totals[i],
            }
        });

        GameSnapshot {
            frames,
            current_frame: self.current,
            ended: self.ended(),
            score: self.score(),
        }
    }
}
