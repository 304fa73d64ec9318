//! Terminal scorecard module.
//!
//! Presentation stays out of `core`: [`ScorecardView`] lays a game snapshot
//! out as the boxes of a paper scorecard (pure, testable) and
//! [`ScorecardPrinter`] flushes those lines to the terminal with crossterm
//! styling.

pub mod printer;
pub mod scorecard;

pub use bowling_score_core as core;
pub use bowling_score_types as types;

pub use printer::{encode_lines_into, ScorecardPrinter};
pub use scorecard::{frame_marks, line_text, Line, Mark, ScorecardView, Span, SpanKind};
