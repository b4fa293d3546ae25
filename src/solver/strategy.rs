//! Question selection strategies
//!
//! Defines the Strategy trait and the two builder variants: fixed attribute
//! order (baseline) and balanced-split selection.

use super::balance::select_most_balanced;
use crate::core::Board;

/// A strategy for choosing the next question attribute during tree building
pub trait Strategy {
    /// Choose the next attribute to ask about
    ///
    /// `characters` are the ids still consistent with the path so far (always
    /// two or more when called); `available` are the attribute ids not yet
    /// used on this path. Returning `None` tells the builder to emit a leaf.
    fn choose_attribute(
        &self,
        board: &Board,
        characters: &[usize],
        available: &[usize],
    ) -> Option<usize>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Attributes in original column order
    Baseline(BaselineStrategy),
    /// Most-even split first (default, shallower trees)
    Balanced(BalancedStrategy),
}

impl Strategy for StrategyType {
    fn choose_attribute(
        &self,
        board: &Board,
        characters: &[usize],
        available: &[usize],
    ) -> Option<usize> {
        match self {
            Self::Baseline(s) => s.choose_attribute(board, characters, available),
            Self::Balanced(s) => s.choose_attribute(board, characters, available),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "baseline", "balanced". Defaults to balanced if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "baseline" | "fixed" => Self::Baseline(BaselineStrategy),
            _ => Self::Balanced(BalancedStrategy),
        }
    }

    /// Human-readable strategy name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline(_) => "baseline",
            Self::Balanced(_) => "balanced",
        }
    }
}

/// Fixed-order strategy
///
/// Always asks about the first attribute remaining on the path, whether or
/// not it discriminates between the current characters. Kept as the baseline
/// the balanced builder is measured against.
pub struct BaselineStrategy;

impl Strategy for BaselineStrategy {
    fn choose_attribute(
        &self,
        _board: &Board,
        _characters: &[usize],
        available: &[usize],
    ) -> Option<usize> {
        available.first().copied()
    }
}

/// Balanced-split strategy
///
/// Asks about the attribute that divides the current characters most evenly,
/// minimizing the expected number of questions left. Declines to choose when
/// every remaining attribute would put all characters on one side: such
/// characters are indistinguishable and the builder falls back to a leaf.
pub struct BalancedStrategy;

impl Strategy for BalancedStrategy {
    fn choose_attribute(
        &self,
        board: &Board,
        characters: &[usize],
        available: &[usize],
    ) -> Option<usize> {
        let (attribute, score) = select_most_balanced(board, characters, available)?;
        // Best score == set size means even the best attribute has an empty side
        if score == characters.len() {
            None
        } else {
            Some(attribute)
        }
    }
}
