//! Mean leaf depth
//!
//! The quality score for comparing builders: the average number of questions
//! needed to reach a character. Lower is better.

use crate::core::{Node, QuestionTree};

/// Mean depth of the character leaves
///
/// A single-leaf tree scores 0.0 (the character is known without asking).
/// A tree without character leaves also scores 0.0.
///
/// # Examples
/// ```
/// use guesswho::core::{Node, QuestionTree};
/// use guesswho::solver::mean_leaf_depth;
///
/// let tree = QuestionTree::new(Node::Question {
///     attribute: 0,
///     yes: Box::new(Node::Leaf(0)),
///     no: Box::new(Node::Leaf(1)),
/// });
/// assert!((mean_leaf_depth(&tree) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn mean_leaf_depth(tree: &QuestionTree) -> f64 {
    let (sum, count) = accumulate(tree.root(), 0);
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Sum of leaf depths and leaf count below `node`, which sits at `depth`
fn accumulate(node: &Node, depth: usize) -> (usize, usize) {
    match node {
        Node::Question { yes, no, .. } => {
            let (yes_sum, yes_count) = accumulate(yes, depth + 1);
            let (no_sum, no_count) = accumulate(no, depth + 1);
            (yes_sum + no_sum, yes_count + no_count)
        }
        Node::Leaf(_) => (depth, 1),
        Node::Empty => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_is_zero() {
        let tree = QuestionTree::new(Node::Leaf(0));
        assert!((mean_leaf_depth(&tree) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn uneven_tree() {
        // depths: 2, 2, 1
        let tree = QuestionTree::new(Node::Question {
            attribute: 0,
            yes: Box::new(Node::Question {
                attribute: 1,
                yes: Box::new(Node::Leaf(1)),
                no: Box::new(Node::Leaf(0)),
            }),
            no: Box::new(Node::Leaf(2)),
        });
        assert!((mean_leaf_depth(&tree) - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_branches_do_not_count() {
        // Only one real leaf at depth 1
        let tree = QuestionTree::new(Node::Question {
            attribute: 0,
            yes: Box::new(Node::Leaf(0)),
            no: Box::new(Node::Empty),
        });
        assert!((mean_leaf_depth(&tree) - 1.0).abs() < 1e-9);
    }
}
