//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the frame state machines and the bonus-resolution
//! fold that turn a stream of rolls into a ten-pin bowling score.
//! It has **no I/O**: callers feed racks in and read scores back.
//!
//! - **Deterministic**: The same rolls always produce the same score
//! - **Testable**: Frames are generic over the [`PinRack`] trait, so any rack
//!   that can report counts will drive them
//! - **Allocation-free**: Roll lists are fixed-capacity `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`pins`]: The [`PinRack`] capability and the ten-pin [`PinSet`]
//! - [`frame`]: Regular and final frame state machines
//! - [`sequence`]: Ten frames in order, roll routing and scoring
//! - [`scoring`]: The left-to-right bonus-resolution fold
//! - [`snapshot`]: Read model of a game for observers
//!
//! # Game Rules
//!
//! - **Strike**: All ten pins on a frame's first roll, worth 10 plus the next two rolls
//! - **Spare**: All ten pins over two rolls, worth 10 plus the next roll
//! - **Open frame**: Fewer than ten pins, worth the pins
//! - **Tenth frame**: A strike or spare earns bonus rolls inside the frame (three rolls total)
//!
//! # Example
//!
//! ```
//! use bowling_score_core::{FrameSequence, PinSet};
//!
//! let mut game = FrameSequence::new();
//!
//! // Strike, then 4 and 5 (each rack lists the pins down so far in the frame)
//! game.roll(&PinSet::with_first_down(10)).unwrap();
//! game.roll(&PinSet::with_first_down(4)).unwrap();
//! game.roll(&PinSet::with_first_down(9)).unwrap();
//! assert_eq!(game.score(), 28);
//!
//! // Gutter the rest
//! while !game.ended() {
//!     game.roll(&PinSet::new()).unwrap();
//! }
//! assert_eq!(game.score(), 28);
//! ```

pub mod error;
pub mod frame;
pub mod pins;
pub mod scoring;
pub mod sequence;
pub mod snapshot;

pub use bowling_score_types as types;

// Re-export commonly used types for convenience
pub use error::BowlingError;
pub use frame::{FinalFrame, Frame, GameFrame, Rolls};
pub use pins::{PinRack, PinSet};
pub use scoring::{score_outcomes, ScoreFold};
pub use sequence::FrameSequence;
pub use snapshot::{FrameSnapshot, GameSnapshot};
