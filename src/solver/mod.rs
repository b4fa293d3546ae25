//! Question-tree engine
//!
//! Tree construction (baseline and balanced variants), redundancy pruning,
//! the depth quality metric, and the game-session state machine.

pub mod balance;
pub mod builder;
pub mod depth;
pub mod prune;
pub mod session;
pub mod strategy;

pub use builder::{BuildOutcome, build_tree};
pub use depth::mean_leaf_depth;
pub use prune::prune;
pub use session::{GameSession, SessionError, SessionState};
pub use strategy::{BalancedStrategy, BaselineStrategy, Strategy, StrategyType};
