//! Core domain types for the Guess Who board and question tree
//!
//! This module contains the fundamental domain types with zero game logic.
//! All types here are pure, testable, and have clear structural invariants.

mod board;
mod tree;

pub use board::{Board, BoardError};
pub use tree::{Node, QuestionTree};
