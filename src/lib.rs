//! Ten-pin bowling scorer (workspace facade crate).
//!
//! Keeps a single `bowling_score::{core,sim,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use bowling_score_core as core;
pub use bowling_score_sim as sim;
pub use bowling_score_term as term;
pub use bowling_score_types as types;
