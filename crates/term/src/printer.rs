//! ScorecardPrinter: writes rendered scorecard lines to a terminal.
//!
//! Commands are queued into an in-memory buffer and written out in one
//! flush, the same way a frame is pushed to the screen.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::scorecard::{Line, SpanKind};

fn color_for(kind: SpanKind) -> Option<Color> {
    match kind {
        SpanKind::Border => Some(Color::DarkGrey),
        SpanKind::Label => None,
        SpanKind::Strike => Some(Color::Red),
        SpanKind::Spare => Some(Color::Yellow),
        SpanKind::Plain => None,
        SpanKind::Score => Some(Color::Cyan),
    }
}

/// Encode styled lines (with a trailing newline each) into `out`.
pub fn encode_lines_into(lines: &[Line], out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in line {
            let bold = matches!(span.kind, SpanKind::Strike | SpanKind::Score);
            if let Some(color) = color_for(span.kind) {
                out.queue(SetForegroundColor(color))?;
            }
            if bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            out.queue(Print(&span.text))?;
            if bold {
                out.queue(SetAttribute(Attribute::Reset))?;
            }
            out.queue(ResetColor)?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

pub struct ScorecardPrinter {
    stdout: io::Stdout,
    buf: Vec<u8>,
    /// Emit plain text without colour or attribute escapes
    plain: bool,
}

impl ScorecardPrinter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            plain: false,
        }
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn print(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        if self.plain {
            for line in lines {
                for span in line {
                    self.buf.extend_from_slice(span.text.as_bytes());
                }
                self.buf.push(b'\n');
            }
        } else {
            encode_lines_into(lines, &mut self.buf)?;
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for ScorecardPrinter {
    fn default() -> Self {
        Self::new()
    }
}
