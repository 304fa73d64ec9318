//! Simulation driver - bowls random games against the scorer
//!
//! The scorer itself never generates rolls; this crate plays the part of
//! the bowler. A seeded [`Bowler`] produces one rack per roll,
//! [`play_game`] feeds them to a [`FrameSequence`](bowling_score_core::FrameSequence)
//! until it ends, and the resulting [`GameReport`] can be printed or
//! serialized to JSON.
//!
//! # Example
//!
//! ```
//! use bowling_score_core::FrameSequence;
//! use bowling_score_sim::{play_game, Bowler};
//!
//! let mut game = FrameSequence::new();
//! let report = play_game(&mut game, &mut Bowler::new(12345)).unwrap();
//!
//! assert!(game.ended());
//! assert_eq!(report.score, game.score());
//! ```

pub mod config;
pub mod report;
pub mod rng;

pub use bowling_score_types as types;

pub use config::{OutputFormat, SimConfig};
pub use report::{play_game, FrameReport, GameReport, RollRecord};
pub use rng::{Bowler, SimpleRng};
