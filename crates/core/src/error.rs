use thiserror::Error;

/// Contract violations raised by frames and the frame sequence.
///
/// Both are caller errors (rolling into something already finished). Nothing
/// is mutated when either is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlingError {
    #[error("this frame has already ended")]
    FrameAlreadyEnded,
    #[error("the game has already ended")]
    GameEnded,
}
