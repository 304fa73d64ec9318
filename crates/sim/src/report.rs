//! Game report - what a simulated game did, roll by roll.

use serde::Serialize;
use tracing::info;

use bowling_score_core::{BowlingError, FrameSequence, GameSnapshot};

use crate::rng::Bowler;

/// One delivery as the bowler reported it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollRecord {
    /// 1-based turn number across the whole game
    pub turn: u32,
    /// 1-based frame the roll went into
    pub frame: usize,
    /// Pins knocked down on the rack the bowler reported
    pub reported: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub frame: usize,
    pub rolls: Vec<u8>,
    pub running: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub seed: u32,
    pub rolls: Vec<RollRecord>,
    pub frames: Vec<FrameReport>,
    pub score: u16,
    pub turns_taken: u32,
    #[serde(skip)]
    pub snapshot: GameSnapshot,
}

impl GameReport {
    fn new(seed: u32, rolls: Vec<RollRecord>, snapshot: GameSnapshot) -> Self {
        let frames = snapshot
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| FrameReport {
                frame: i + 1,
                rolls: frame.rolls.to_vec(),
                running: frame.running,
            })
            .collect();

        Self {
            seed,
            turns_taken: rolls.len() as u32,
            rolls,
            frames,
            score: snapshot.score,
            snapshot,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Bowl until the game ends and report what happened
pub fn play_game(game: &mut FrameSequence, bowler: &mut Bowler) -> Result<GameReport, BowlingError> {
    let mut rolls = Vec::new();

    while !game.ended() {
        let frame = game.current_frame() + 1;
        let (reported, rack) = bowler.next_roll();
        game.roll(&rack)?;

        let turn = rolls.len() as u32 + 1;
        info!(turn, frame, reported, "bowled");
        rolls.push(RollRecord {
            turn,
            frame,
            reported,
        });
    }

    Ok(GameReport::new(bowler.seed(), rolls, game.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_game() {
        let first = play_game(&mut FrameSequence::new(), &mut Bowler::new(2024)).unwrap();
        let second = play_game(&mut FrameSequence::new(), &mut Bowler::new(2024)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_is_consistent() {
        let mut game = FrameSequence::new();
        let report = play_game(&mut game, &mut Bowler::new(7)).unwrap();

        assert!(game.ended());
        assert_eq!(report.score, game.score());
        assert_eq!(report.turns_taken as usize, report.rolls.len());
        assert!((11..=21).contains(&report.rolls.len()));
        assert_eq!(report.frames.len(), 10);
        assert_eq!(report.frames[9].running, Some(report.score));
        assert!(report.score <= 300);
    }

    #[test]
    fn test_report_json_shape() {
        let report = play_game(&mut FrameSequence::new(), &mut Bowler::new(3)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["seed"], 3);
        assert_eq!(json["score"], report.score);
        assert_eq!(json["frames"].as_array().map(Vec::len), Some(10));
        assert!(json.get("snapshot").is_none());
    }

    #[test]
    fn test_finished_game_cannot_be_replayed() {
        let mut game = FrameSequence::new();
        play_game(&mut game, &mut Bowler::new(11)).unwrap();
        // Nothing left to bowl: an immediate report with no rolls
        let again = play_game(&mut game, &mut Bowler::new(11)).unwrap();
        assert!(again.rolls.is_empty());
    }
}
