//! ScorecardView: maps a `GameSnapshot` into the lines of a paper scorecard.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! +-----+-----+-----+-----+-----+-----+-----+-----+-----+-------+
//! |  1  |  2  |  3  |  4  |  5  |  6  |  7  |  8  |  9  |  10   |
//! |   X | 7 / | 9 - |     |     |     |     |     |     |       |
//! |  20 |  39 |  48 |     |     |     |     |     |     |       |
//! +-----+-----+-----+-----+-----+-----+-----+-----+-----+-------+
//! ```

use arrayvec::ArrayVec;

use crate::core::GameSnapshot;
use crate::types::{MAX_ROLLS_PER_FRAME, PIN_COUNT};

/// Inner width of a regular frame box
const FRAME_W: usize = 5;
/// Inner width of the final frame box
const FINAL_W: usize = 7;

/// How a single roll is written on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Gutter => '-',
            Mark::Pins(n) => char::from_digit(*n as u32, 10).unwrap_or('?'),
        }
    }
}

/// Marks for one frame's rolls
///
/// A ten with the first ball at a full rack is a strike and a ball that
/// clears what was left is a spare; either stands the rack back up (only the
/// final frame rolls again after that).
pub fn frame_marks(rolls: &[u8]) -> ArrayVec<Mark, MAX_ROLLS_PER_FRAME> {
    let mut marks = ArrayVec::new();
    let mut rack_down = 0u8;
    let mut fresh_rack = true;

    for &roll in rolls.iter().take(MAX_ROLLS_PER_FRAME) {
        let mark = if fresh_rack && roll == PIN_COUNT {
            Mark::Strike
        } else if !fresh_rack && rack_down + roll == PIN_COUNT {
            Mark::Spare
        } else if roll == 0 {
            Mark::Gutter
        } else {
            Mark::Pins(roll)
        };

        match mark {
            Mark::Strike | Mark::Spare => {
                rack_down = 0;
                fresh_rack = true;
            }
            _ => {
                rack_down += roll;
                fresh_rack = false;
            }
        }
        marks.push(mark);
    }
    marks
}

/// Style class of a span; the printer maps these to colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Border,
    Label,
    Strike,
    Spare,
    Plain,
    Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

pub type Line = Vec<Span>;

/// Plain text of a rendered line
pub fn line_text(line: &[Span]) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScorecardView {
    /// Append a line with the total and game status
    pub show_total: bool,
}

impl ScorecardView {
    pub fn new() -> Self {
        Self { show_total: true }
    }

    pub fn render(&self, snap: &GameSnapshot) -> Vec<Line> {
        let widths: Vec<usize> = (0..snap.frames.len())
            .map(|i| if i + 1 == snap.frames.len() { FINAL_W } else { FRAME_W })
            .collect();

        let mut lines = vec![
            border(&widths),
            boxed(&widths, |i, w| {
                vec![Span::new(format!("{:^w$}", i + 1), SpanKind::Label)]
            }),
            boxed(&widths, |i, w| mark_spans(&snap.frames[i].rolls, w)),
            boxed(&widths, |i, w| {
                let text = match snap.frames[i].running {
                    Some(score) => format!("{score:>w$}", w = w - 1) + " ",
                    None => " ".repeat(w),
                };
                vec![Span::new(text, SpanKind::Score)]
            }),
            border(&widths),
        ];

        if self.show_total {
            let status = if snap.ended {
                "final".to_string()
            } else {
                format!("frame {}", snap.current_frame + 1)
            };
            lines.push(vec![
                Span::new("Total: ", SpanKind::Label),
                Span::new(snap.score.to_string(), SpanKind::Score),
                Span::new(format!(" ({status})"), SpanKind::Label),
            ]);
        }
        lines
    }
}

fn border(widths: &[usize]) -> Line {
    let mut text = String::from("+");
    for &w in widths {
        text.push_str(&"-".repeat(w));
        text.push('+');
    }
    vec![Span::new(text, SpanKind::Border)]
}

fn boxed(widths: &[usize], mut cell: impl FnMut(usize, usize) -> Vec<Span>) -> Line {
    let mut line = vec![Span::new("|", SpanKind::Border)];
    for (i, &w) in widths.iter().enumerate() {
        line.extend(cell(i, w));
        line.push(Span::new("|", SpanKind::Border));
    }
    line
}

/// Marks right-aligned in a box, separated by single spaces
fn mark_spans(rolls: &[u8], width: usize) -> Vec<Span> {
    let marks = frame_marks(rolls);
    // A lone strike sits in the right-hand slot, as on a paper card
    let used = if marks.is_empty() { 0 } else { marks.len() * 2 - 1 };
    let mut spans = vec![Span::new(" ".repeat(width - used - 1), SpanKind::Plain)];

    for (i, mark) in marks.iter().enumerate() {
        if i > 0 {
            spans.push(Span::new(" ", SpanKind::Plain));
        }
        let kind = match mark {
            Mark::Strike => SpanKind::Strike,
            Mark::Spare => SpanKind::Spare,
            _ => SpanKind::Plain,
        };
        spans.push(Span::new(mark.symbol().to_string(), kind));
    }
    spans.push(Span::new(" ", SpanKind::Plain));
    spans
}
