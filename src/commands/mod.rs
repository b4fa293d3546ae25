//! Command implementations

pub mod compare;
pub mod play;
pub mod show;

pub use compare::{BuilderStats, CompareResult, SweepRow, compare_builders, run_sweep};
pub use play::run_play;
pub use show::{TreeReport, report_tree};
