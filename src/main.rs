//! Random game runner (default binary).
//!
//! Bowls one seeded random game, printing each roll, the scorecard and the
//! final score. Configure with `BOWLING_SEED`, `BOWLING_OUTPUT` (`text` or
//! `json`) and `BOWLING_QUIET`; diagnostics follow `RUST_LOG`.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::debug;

use bowling_score::core::FrameSequence;
use bowling_score::logging;
use bowling_score::sim::{play_game, Bowler, GameReport, OutputFormat, SimConfig};
use bowling_score::term::{ScorecardPrinter, ScorecardView};

fn main() -> Result<()> {
    logging::init();

    let config = SimConfig::from_env()?;
    debug!(?config, "starting game");

    let mut game = FrameSequence::new();
    let mut bowler = Bowler::new(config.seed);
    let report = play_game(&mut game, &mut bowler).context("bowling a simulated game")?;

    match config.output {
        OutputFormat::Text => print_text(&report, config.quiet),
        OutputFormat::Json => {
            println!("{}", report.to_json().context("encoding game report")?);
            Ok(())
        }
    }
}

fn print_text(report: &GameReport, quiet: bool) -> Result<()> {
    if !quiet {
        for roll in &report.rolls {
            println!("Bowled: {} on turn {}", roll.reported, roll.turn);
        }
    }

    let lines = ScorecardView::new().render(&report.snapshot);
    ScorecardPrinter::new()
        .plain(!io::stdout().is_terminal())
        .print(&lines)?;

    println!("Final Score: {}", report.score);
    println!("Turns Taken: {}", report.turns_taken);
    println!("Seed: {}", report.seed);
    Ok(())
}
