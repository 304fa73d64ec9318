use crate::frame::Rolls;
use crate::types::{FrameOutcome, FRAME_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub rolls: Rolls,
    /// `None` until the frame has been rolled into
    pub outcome: Option<FrameOutcome>,
    /// The frame's turn is over
    pub complete: bool,
    /// Cumulative score through this frame; `None` until the frame is
    /// finished and the bonus rolls it is owed have been bowled
    pub running: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    pub current_frame: usize,
    pub ended: bool,
    pub score: u16,
}
