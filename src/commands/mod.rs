//! Command implementations

pub mod check;
pub mod extract;
pub mod level;
pub mod simple;
pub mod simulate;

pub use check::{CheckResult, check_guess};
pub use extract::{ExtractSummary, run_extract};
pub use level::{LevelInfo, describe_level};
pub use simple::{SimpleSummary, run_simple};
pub use simulate::{LevelOutcome, SimulationResult, play_level, run_simulation};
