//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_compare_result, print_sweep, print_tree, print_tree_report};
