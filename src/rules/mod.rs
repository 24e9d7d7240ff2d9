//! Match rules: the engine and the outcomes it reports.
//!
//! The display layer translates input into three calls on `MatchEngine`
//! (`select_card`, `acknowledge_mismatch`, `restart`) and renders the
//! returned `SelectionOutcome`.

pub mod engine;
pub mod outcome;

pub use engine::MatchEngine;
pub use outcome::{CompletionReport, GameResult, IgnoreReason, SelectionOutcome};
