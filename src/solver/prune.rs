//! Redundant question elimination
//!
//! A question is redundant when every character still in play falls on one
//! side of it: the other side is an empty subtree the structure allocated
//! but no answer path can usefully reach. Pruning replaces such questions
//! with their sole populated child, bottom-up, leaving every surviving
//! answer path resolving to the same character as before.

use crate::core::{Node, QuestionTree};

/// Remove redundant question nodes
///
/// Idempotent: pruning an already-pruned tree is a no-op. A tree whose root
/// is already a leaf is returned unchanged.
///
/// # Examples
/// ```
/// use guesswho::core::{Node, QuestionTree};
/// use guesswho::solver::prune;
///
/// // "a0?" cannot distinguish anything: its no-side is empty.
/// let tree = QuestionTree::new(Node::Question {
///     attribute: 0,
///     yes: Box::new(Node::Leaf(0)),
///     no: Box::new(Node::Empty),
/// });
/// assert_eq!(prune(tree), QuestionTree::new(Node::Leaf(0)));
/// ```
#[must_use]
pub fn prune(tree: QuestionTree) -> QuestionTree {
    QuestionTree::new(prune_node(tree.into_root()))
}

fn prune_node(node: Node) -> Node {
    match node {
        Node::Question { attribute, yes, no } => {
            let yes = prune_node(*yes);
            let no = prune_node(*no);
            if !yes.has_leaf() {
                return no;
            }
            if !no.has_leaf() {
                return yes;
            }
            Node::Question {
                attribute,
                yes: Box::new(yes),
                no: Box::new(no),
            }
        }
        leaf => leaf,
    }
}
