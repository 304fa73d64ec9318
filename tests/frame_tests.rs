//! Frame tests - single frames against real racks

use bowling_score::core::{BowlingError, FinalFrame, Frame, PinRack, PinSet};
use bowling_score::types::{FrameOutcome, Pin};

fn rack(pins: &[Pin]) -> PinSet {
    pins.iter().copied().collect()
}

#[test]
fn test_frame_rejects_every_roll_after_end() {
    let mut frame = Frame::new(PinSet::new());
    frame.bowled(&PinSet::with_first_down(10)).unwrap();
    for _ in 0..3 {
        assert_eq!(
            frame.bowled(&PinSet::new()),
            Err(BowlingError::FrameAlreadyEnded)
        );
    }
    assert_eq!(frame.score(), FrameOutcome::Strike);
}

#[test]
fn test_frame_never_rejects_while_open() {
    let mut frame = Frame::new(PinSet::new());
    assert!(frame.bowled(&PinSet::new()).is_ok());
    assert!(!frame.turn_ended());
    assert!(frame.bowled(&PinSet::new()).is_ok());
    assert!(frame.turn_ended());
}

#[test]
fn test_frame_counts_are_cumulative() {
    let mut frame = Frame::new(PinSet::new());
    frame.bowled(&rack(&[Pin::Seven, Pin::Ten])).unwrap();
    frame.bowled(&rack(&[Pin::One, Pin::Two, Pin::Three])).unwrap();

    assert_eq!(frame.rolls().as_slice(), &[2, 3]);
    assert_eq!(frame.pins().count_down(), 5);
    assert!(frame.pins().is_down(Pin::Ten));
    assert!(frame.pins().is_up(Pin::Five));
}

#[test]
fn test_final_frame_restands_pins_after_strike() {
    let mut frame = FinalFrame::new(PinSet::new());
    frame.bowled(&PinSet::with_first_down(10)).unwrap();
    assert!(frame.pins().all_down());

    frame.bowled(&rack(&[Pin::Four, Pin::Seven])).unwrap();
    assert_eq!(frame.pins().count_down(), 2);
    assert!(!frame.turn_ended());

    // Third ball goes at the eight pins left standing
    let leave: PinSet = Pin::ALL
        .into_iter()
        .filter(|p| !matches!(p, Pin::Four | Pin::Seven))
        .collect();
    frame.bowled(&leave).unwrap();
    assert!(frame.turn_ended());
    assert_eq!(
        frame.score(),
        FrameOutcome::StrikeWithBonus {
            second: 2,
            bonus: 8
        }
    );
}

#[test]
fn test_final_frame_restands_pins_after_spare() {
    let mut frame = FinalFrame::new(PinSet::new());
    frame.bowled(&PinSet::with_first_down(6)).unwrap();
    frame.bowled(&PinSet::with_first_down(10)).unwrap();
    assert!(!frame.turn_ended());

    frame.bowled(&PinSet::with_first_down(3)).unwrap();
    assert_eq!(frame.pins().count_down(), 3);
    assert_eq!(
        frame.score(),
        FrameOutcome::SpareWithBonus { first: 6, bonus: 3 }
    );
    assert_eq!(
        frame.bowled(&PinSet::new()),
        Err(BowlingError::FrameAlreadyEnded)
    );
}

#[test]
fn test_final_frame_open_gets_no_bonus() {
    let mut frame = FinalFrame::new(PinSet::new());
    frame.bowled(&PinSet::with_first_down(9)).unwrap();
    frame.bowled(&PinSet::with_first_down(9)).unwrap();
    assert!(frame.turn_ended());
    assert_eq!(
        frame.score(),
        FrameOutcome::Open {
            total: 9,
            first: 9,
            second: 0
        }
    );
    assert_eq!(
        frame.bowled(&PinSet::with_first_down(10)),
        Err(BowlingError::FrameAlreadyEnded)
    );
}
