//! Question tree
//!
//! Binary tree of yes/no attribute questions. Internal nodes ask "does your
//! character have this attribute?"; leaves name a resolved character. Pure
//! data structure: building, pruning and playing live in `solver`.

/// A node of the question tree
///
/// A question node always has both children. A branch no character falls
/// into is an explicit `Empty` subtree (the fixed-order builder produces
/// these when an attribute fails to split the remaining characters); the
/// pruning pass removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Internal yes/no question about an attribute id
    Question {
        attribute: usize,
        yes: Box<Node>,
        no: Box<Node>,
    },
    /// A resolved character id
    Leaf(usize),
    /// A branch no character falls into
    Empty,
}

impl Node {
    /// Whether any character leaf is reachable from this node
    #[must_use]
    pub fn has_leaf(&self) -> bool {
        match self {
            Self::Question { yes, no, .. } => yes.has_leaf() || no.has_leaf(),
            Self::Leaf(_) => true,
            Self::Empty => false,
        }
    }

    fn collect_leaves(&self, out: &mut Vec<usize>) {
        match self {
            Self::Question { yes, no, .. } => {
                yes.collect_leaves(out);
                no.collect_leaves(out);
            }
            Self::Leaf(character) => out.push(*character),
            Self::Empty => {}
        }
    }
}

/// An owned question tree
///
/// Built whole by the tree builder; optionally transformed by the pruner;
/// held immutably afterwards. Structural equality (`PartialEq`) compares
/// shape, questions and leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTree {
    root: Node,
}

impl QuestionTree {
    /// Wrap a root node
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// The root node
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consume the tree, yielding its root
    #[must_use]
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Character ids at the leaves, in yes-before-no traversal order
    #[must_use]
    pub fn leaf_characters(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }

    /// Number of character leaves
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaf_characters().len()
    }

    /// Number of internal question nodes
    #[must_use]
    pub fn question_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Question { yes, no, .. } => 1 + count(yes) + count(no),
                Node::Leaf(_) | Node::Empty => 0,
            }
        }
        count(&self.root)
    }

    /// Depth of the deepest node (a lone leaf or empty root has depth 0)
    #[must_use]
    pub fn max_depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Question { yes, no, .. } => 1 + depth(yes).max(depth(no)),
                Node::Leaf(_) | Node::Empty => 0,
            }
        }
        depth(&self.root)
    }
}
