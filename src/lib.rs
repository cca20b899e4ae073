pub mod args;
pub mod domain;
pub mod error;
pub mod report;
pub mod roster;
pub mod sheet;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use error::AnalysisError;
pub use roster::{analyze_roster, AnalysisResult};
pub use stats::RosterStats;
