//! Simulation configuration, read from the environment.
//!
//! - `BOWLING_SEED`: RNG seed (default: derived from the clock)
//! - `BOWLING_OUTPUT`: `text` or `json` (default: `text`)
//! - `BOWLING_QUIET`: Set to "1" or "true" to skip the per-roll log lines

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

/// How the finished game is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse output format from string (case-insensitive)
impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("expected \"text\" or \"json\", got {s:?}")),
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    pub output: OutputFormat,
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            output: OutputFormat::Text,
            quiet: false,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup("BOWLING_SEED") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("BOWLING_SEED must be a u32, got {raw:?}"))?,
            None => clock_seed(),
        };

        let output = match lookup("BOWLING_OUTPUT") {
            Some(raw) => raw.parse().context("invalid BOWLING_OUTPUT")?,
            None => OutputFormat::default(),
        };

        let quiet = lookup("BOWLING_QUIET")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            seed,
            output,
            quiet,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
