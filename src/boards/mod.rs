//! Board sources
//!
//! The embedded default board, the tab-separated file loader, and the
//! random-board generator used for builder comparisons.

mod embedded;
pub mod loader;
pub mod random;

pub use embedded::DEFAULT_BOARD_TSV;
pub use random::random_board;

use crate::core::Board;

/// The embedded default board
///
/// # Panics
/// Never panics in practice: the embedded constant is well-formed and the
/// test below keeps it that way.
#[must_use]
pub fn default_board() -> Board {
    loader::parse_tsv(DEFAULT_BOARD_TSV).expect("embedded board is well-formed")
}
