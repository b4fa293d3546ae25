//! Game session state machine
//!
//! Holds the current position in an owned question tree plus the answers
//! given so far. The position is re-derived from the answer path on every
//! query rather than stored as a reference into the tree, and the set of
//! characters still in play is recomputed from the board independently of
//! the tree, so tree/board disagreements are detectable instead of masked.

use crate::core::{Board, Node, QuestionTree};
use std::collections::BTreeSet;
use std::fmt;

/// Observable state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a yes/no answer about an attribute
    AtQuestion { attribute: usize },
    /// A leaf was reached; the game is over
    Resolved { character: usize },
}

/// Error type for session transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Answering a resolved game, or descending into a branch no character
    /// occupies (possible only on unpruned trees)
    InvalidTransition,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition => write!(f, "No question to answer in this state"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A single play-through of a question tree
///
/// Created at the root; [`GameSession::answer`] descends one level per call;
/// [`GameSession::restart`] returns to the root at any time. The session
/// owns its tree and never mutates it; the board is borrowed read-only.
pub struct GameSession<'a> {
    board: &'a Board,
    tree: QuestionTree,
    answers: Vec<(usize, bool)>,
}

impl<'a> GameSession<'a> {
    /// Start a session at the root of `tree`
    ///
    /// The tree must have been built from `board` (same id space) and from at
    /// least one character.
    #[must_use]
    pub fn new(board: &'a Board, tree: QuestionTree) -> Self {
        Self {
            board,
            tree,
            answers: Vec::new(),
        }
    }

    /// The node the answers so far lead to
    fn position(&self) -> &Node {
        let mut node = self.tree.root();
        for &(_, answer) in &self.answers {
            if let Node::Question { yes, no, .. } = node {
                node = if answer { yes } else { no };
            }
        }
        node
    }

    /// Current state
    ///
    /// # Panics
    /// Panics if the tree was built from a board with no characters.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.position() {
            Node::Question { attribute, .. } => SessionState::AtQuestion {
                attribute: *attribute,
            },
            Node::Leaf(character) => SessionState::Resolved {
                character: *character,
            },
            Node::Empty => panic!("question tree has no characters"),
        }
    }

    /// Answer the current question and move to the matching child
    ///
    /// # Errors
    /// Returns `SessionError::InvalidTransition` if the game is already
    /// resolved, or if the answered branch contains no character (unpruned
    /// tree).
    pub fn answer(&mut self, answer: bool) -> Result<SessionState, SessionError> {
        let attribute = match self.position() {
            Node::Question { attribute, yes, no } => {
                let child = if answer { yes.as_ref() } else { no.as_ref() };
                if matches!(child, Node::Empty) {
                    return Err(SessionError::InvalidTransition);
                }
                *attribute
            }
            _ => return Err(SessionError::InvalidTransition),
        };
        self.answers.push((attribute, answer));
        Ok(self.state())
    }

    /// Forget all answers and return to the root
    pub fn restart(&mut self) {
        self.answers.clear();
    }

    /// The `(attribute, answer)` pairs recorded on the path from the root
    #[must_use]
    pub fn answers(&self) -> &[(usize, bool)] {
        &self.answers
    }

    /// Characters consistent with every answer so far, from the board alone
    ///
    /// Deliberately ignores the tree: each board character is checked against
    /// the recorded answers directly. On a correctly built tree this equals
    /// [`GameSession::tree_candidates`].
    #[must_use]
    pub fn remaining_candidates(&self) -> BTreeSet<String> {
        (0..self.board.character_count())
            .filter(|&c| {
                self.answers
                    .iter()
                    .all(|&(attribute, answer)| self.board.value(c, attribute) == answer)
            })
            .filter_map(|c| self.board.character_name(c).map(str::to_string))
            .collect()
    }

    /// Characters at the leaves below the current position
    ///
    /// The tree-derived counterpart of [`GameSession::remaining_candidates`],
    /// kept as a separate computation path for cross-checking.
    #[must_use]
    pub fn tree_candidates(&self) -> BTreeSet<String> {
        let subtree = QuestionTree::new(self.position().clone());
        subtree
            .leaf_characters()
            .into_iter()
            .filter_map(|c| self.board.character_name(c).map(str::to_string))
            .collect()
    }
}
