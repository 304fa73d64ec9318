//! Scoring module - bonus resolution across frames
//!
//! A strike is owed the next two rolls and a spare the next one. The fold
//! walks frame outcomes left to right, adding each frame's own pins and
//! paying outstanding obligations out of the rolls the frame carries.
//!
//! `pending` counts the rolls still owed. It never exceeds 3: the worst
//! case is two strikes in a row, the first owing one more roll and the
//! second owing two. A roll settles one owed roll per creditor frame, so
//! with `pending == 3` the next roll pays twice.

use crate::types::{FrameOutcome, PIN_COUNT};

const TEN: u16 = PIN_COUNT as u16;

/// Running state of the scoring fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreFold {
    total: u16,
    pending: u8,
}

impl ScoreFold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score accumulated so far
    pub fn total(&self) -> u16 {
        self.total
    }

    /// Rolls still owed to earlier strikes and spares (0-3)
    pub fn pending(&self) -> u8 {
        self.pending
    }

    /// Fold one frame's outcome into the running score
    pub fn apply(&mut self, outcome: FrameOutcome) {
        match outcome {
            FrameOutcome::Open {
                total,
                first,
                second,
            } => {
                self.total += total as u16;
                self.settle_two(first as u16, second as u16);
            }
            FrameOutcome::Strike => {
                self.total += TEN;
                self.settle_one(TEN);
                self.pending += 2;
            }
            FrameOutcome::Spare { first } => {
                self.total += TEN;
                self.settle_two(first as u16, TEN - first as u16);
                self.pending += 1;
            }
            FrameOutcome::SpareWithBonus { first, bonus } => {
                self.total += TEN + bonus as u16;
                self.settle_two(first as u16, TEN - first as u16);
            }
            FrameOutcome::StrikeWithBonus { second, bonus } => {
                self.total += TEN + second as u16 + bonus as u16;
                self.settle_two(TEN, second as u16);
            }
            FrameOutcome::ThreeStrikes => {
                self.total += 3 * TEN;
                self.settle_two(TEN, TEN);
            }
        }
    }

    /// Pay owed rolls out of a single roll; used when the frame has no
    /// second roll of its own (a strike).
    fn settle_one(&mut self, roll: u16) {
        match self.pending {
            0 => {}
            3 => {
                self.total += 2 * roll;
                self.pending = 1;
            }
            _ => {
                self.total += roll;
                self.pending -= 1;
            }
        }
    }

    /// Pay every owed roll out of the frame's first two rolls.
    fn settle_two(&mut self, first: u16, second: u16) {
        self.total += match self.pending {
            0 => 0,
            1 => first,
            2 => first + second,
            _ => 2 * first + second,
        };
        self.pending = 0;
    }
}

/// Fold a sequence of frame outcomes (in frame order) into a total
///
/// # Examples
///
/// ```
/// use bowling_score_core::score_outcomes;
/// use bowling_score_core::types::FrameOutcome;
///
/// let outcomes = [
///     FrameOutcome::Strike,
///     FrameOutcome::Open { total: 9, first: 4, second: 5 },
/// ];
/// assert_eq!(score_outcomes(outcomes), 28);
/// ```
pub fn score_outcomes<I>(outcomes: I) -> u16
where
    I: IntoIterator<Item = FrameOutcome>,
{
    let mut fold = ScoreFold::new();
    for outcome in outcomes {
        fold.apply(outcome);
    }
    fold.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(first: u8, second: u8) -> FrameOutcome {
        FrameOutcome::Open {
            total: first + second,
            first,
            second,
        }
    }

    fn game(head: &[FrameOutcome], last: FrameOutcome) -> Vec<FrameOutcome> {
        let mut frames = vec![open(0, 0); 9 - head.len()];
        frames.splice(0..0, head.iter().copied());
        frames.push(last);
        frames
    }

    #[test]
    fn test_gutter_game() {
        assert_eq!(score_outcomes(game(&[], open(0, 0))), 0);
    }

    #[test]
    fn test_single_five() {
        assert_eq!(score_outcomes(game(&[open(5, 0)], open(0, 0))), 5);
    }

    #[test]
    fn test_perfect_game() {
        let frames = game(&[FrameOutcome::Strike; 9], FrameOutcome::ThreeStrikes);
        assert_eq!(score_outcomes(frames), 300);
    }

    #[test]
    fn test_strike_then_open() {
        assert_eq!(
            score_outcomes(game(&[FrameOutcome::Strike, open(4, 5)], open(0, 0))),
            28
        );
        assert_eq!(
            score_outcomes(game(&[FrameOutcome::Strike, open(7, 0)], open(0, 0))),
            24
        );
    }

    #[test]
    fn test_spare_then_open() {
        assert_eq!(
            score_outcomes(game(
                &[FrameOutcome::Spare { first: 7 }, open(4, 5)],
                open(0, 0)
            )),
            23
        );
        assert_eq!(
            score_outcomes(game(
                &[FrameOutcome::Spare { first: 3 }, open(5, 0)],
                open(0, 0)
            )),
            20
        );
    }

    #[test]
    fn test_strike_then_spare() {
        assert_eq!(
            score_outcomes(game(
                &[FrameOutcome::Strike, FrameOutcome::Spare { first: 6 }],
                open(0, 0)
            )),
            30
        );
    }

    #[test]
    fn test_spare_then_spare() {
        assert_eq!(
            score_outcomes(game(
                &[
                    FrameOutcome::Spare { first: 7 },
                    FrameOutcome::Spare { first: 9 }
                ],
                open(0, 0)
            )),
            29
        );
    }

    #[test]
    fn test_double_strike_then_open_or_spare() {
        let strikes = [FrameOutcome::Strike, FrameOutcome::Strike];
        let mut head = strikes.to_vec();
        head.push(open(4, 5));
        assert_eq!(score_outcomes(game(&head, open(0, 0))), 52);

        let mut head = strikes.to_vec();
        head.push(FrameOutcome::Spare { first: 6 });
        assert_eq!(score_outcomes(game(&head, open(0, 0))), 56);
    }

    #[test]
    fn test_turkey_then_open() {
        let head = [
            FrameOutcome::Strike,
            FrameOutcome::Strike,
            FrameOutcome::Strike,
            open(4, 5),
        ];
        // 30 + 24 + 19 + 9
        assert_eq!(score_outcomes(game(&head, open(0, 0))), 82);
    }

    #[test]
    fn test_pending_stays_bounded() {
        let mut fold = ScoreFold::new();
        for _ in 0..9 {
            fold.apply(FrameOutcome::Strike);
            assert!(fold.pending() <= 3);
        }
        assert_eq!(fold.pending(), 3);
        fold.apply(FrameOutcome::ThreeStrikes);
        assert_eq!(fold.pending(), 0);
        assert_eq!(fold.total(), 300);
    }

    #[test]
    fn test_final_frame_shapes() {
        let mut head = vec![open(0, 0); 8];
        head.push(FrameOutcome::Strike);
        assert_eq!(score_outcomes(game(&head, FrameOutcome::ThreeStrikes)), 60);
        assert_eq!(
            score_outcomes(game(
                &head,
                FrameOutcome::SpareWithBonus { first: 7, bonus: 8 }
            )),
            38
        );

        let mut head = vec![open(0, 0); 7];
        head.extend([FrameOutcome::Strike, FrameOutcome::Strike]);
        assert_eq!(
            score_outcomes(game(
                &head,
                FrameOutcome::SpareWithBonus { first: 4, bonus: 5 }
            )),
            59
        );

        let mut head = vec![open(0, 0); 8];
        head.push(FrameOutcome::Spare { first: 5 });
        assert_eq!(
            score_outcomes(game(
                &head,
                FrameOutcome::SpareWithBonus { first: 2, bonus: 6 }
            )),
            28
        );
    }

    #[test]
    fn test_strike_with_bonus() {
        // Tenth frame alone: X 3 7
        assert_eq!(
            score_outcomes(game(
                &[],
                FrameOutcome::StrikeWithBonus {
                    second: 3,
                    bonus: 7
                }
            )),
            20
        );

        // X X in 8 and 9, then X X 7: 30 + 30 + 27
        let mut head = vec![open(0, 0); 7];
        head.extend([FrameOutcome::Strike, FrameOutcome::Strike]);
        assert_eq!(
            score_outcomes(game(
                &head,
                FrameOutcome::StrikeWithBonus {
                    second: 10,
                    bonus: 7
                }
            )),
            87
        );
    }

    #[test]
    fn test_never_rolled_frames_score_nothing() {
        let mut fold = ScoreFold::new();
        fold.apply(FrameOutcome::Strike);
        fold.apply(FrameOutcome::default());
        assert_eq!(fold.total(), 10);
        assert_eq!(fold.pending(), 0);
    }
}
