//! Guess Who Solver
//!
//! Builds yes/no question trees over a boolean character board and plays the
//! guessing game against them. The balanced builder picks the attribute with
//! the most even split at every step, minimizing the average number of
//! questions; a pruning pass removes questions that cannot discriminate.
//!
//! # Quick Start
//!
//! ```rust
//! use guesswho::boards::default_board;
//! use guesswho::solver::{StrategyType, build_tree, mean_leaf_depth, prune};
//!
//! let board = default_board();
//! let outcome = build_tree(&board, &StrategyType::from_name("balanced"));
//! let tree = prune(outcome.tree);
//!
//! assert_eq!(tree.leaf_count(), board.character_count());
//! println!("Mean questions per game: {:.2}", mean_leaf_depth(&tree));
//! ```

// Core domain types
pub mod core;

// Tree building, pruning, and game sessions
pub mod solver;

// Board sources
pub mod boards;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
