//! Tree inspection
//!
//! Builds the question tree for a board and collects the numbers a player
//! would want to see: question/leaf counts and mean depth, before and after
//! pruning, plus any indistinguishable character groups.

use crate::core::{Board, QuestionTree};
use crate::solver::{StrategyType, build_tree, mean_leaf_depth, prune};

/// Summary of one builder's tree over a board
pub struct TreeReport {
    pub strategy: &'static str,
    pub question_count: usize,
    pub leaf_count: usize,
    pub mean_depth: f64,
    pub pruned_question_count: usize,
    pub pruned_mean_depth: f64,
    pub degenerate_groups: Vec<Vec<String>>,
    /// The pruned tree, for rendering
    pub tree: QuestionTree,
}

/// Build and measure a tree for the board
#[must_use]
pub fn report_tree(board: &Board, strategy: &StrategyType) -> TreeReport {
    let outcome = build_tree(board, strategy);
    let question_count = outcome.tree.question_count();
    let leaf_count = outcome.tree.leaf_count();
    let mean_depth = mean_leaf_depth(&outcome.tree);

    let degenerate_groups = outcome
        .degenerate_groups
        .iter()
        .map(|group| {
            group
                .iter()
                .filter_map(|&c| board.character_name(c).map(str::to_string))
                .collect()
        })
        .collect();

    let pruned = prune(outcome.tree);

    TreeReport {
        strategy: strategy.name(),
        question_count,
        leaf_count,
        mean_depth,
        pruned_question_count: pruned.question_count(),
        pruned_mean_depth: mean_leaf_depth(&pruned),
        degenerate_groups,
        tree: pruned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::default_board;

    #[test]
    fn report_on_default_board() {
        let board = default_board();
        let report = report_tree(&board, &StrategyType::from_name("balanced"));

        assert_eq!(report.strategy, "balanced");
        assert_eq!(report.leaf_count, 8);
        assert!(report.degenerate_groups.is_empty());
        // Pruning never adds questions
        assert!(report.pruned_question_count <= report.question_count);
        assert!(report.pruned_mean_depth <= report.mean_depth + 1e-9);
        // A binary tree with 8 leaves cannot average fewer than 3 questions
        assert!(report.pruned_mean_depth >= 3.0 - 1e-9);
    }

    #[test]
    fn report_names_degenerate_groups() {
        let board = Board::from_rows(
            vec!["Glasses".into()],
            vec![
                ("Twin A".into(), vec![true]),
                ("Twin B".into(), vec![true]),
            ],
        )
        .unwrap();
        let report = report_tree(&board, &StrategyType::from_name("balanced"));
        assert_eq!(
            report.degenerate_groups,
            vec![vec!["Twin A".to_string(), "Twin B".to_string()]]
        );
    }
}
