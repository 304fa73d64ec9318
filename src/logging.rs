//! Diagnostics for the simulator binary.
//!
//! Reads `RUST_LOG` (defaults to `warn`) and writes compact lines to stderr,
//! so stdout carries only the game report. `RUST_LOG=bowling_score_sim=info`
//! logs every roll; `bowling_score_core=debug` logs each finished frame.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
