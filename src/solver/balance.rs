//! Split balance scoring
//!
//! Given a set of characters and an attribute, counts how the attribute
//! partitions the set. The balanced builder asks for the attribute whose
//! partition is closest to an even split.

use crate::core::Board;
use rayon::prelude::*;

/// Count how an attribute splits a character set
///
/// Returns `(with, without)`: how many of `characters` have / lack the
/// attribute.
///
/// # Panics
/// Panics if any id in `characters` or `attribute` is outside the board.
#[must_use]
pub fn split_counts(board: &Board, characters: &[usize], attribute: usize) -> (usize, usize) {
    let with = characters
        .iter()
        .filter(|&&c| board.value(c, attribute))
        .count();
    (with, characters.len() - with)
}

/// Select the attribute with the most even split
///
/// Scores every available attribute by `|with - without|` and returns the
/// minimizer together with its score; ties go to the lowest attribute id.
/// Returns `None` only for an empty attribute pool. An attribute that puts
/// every character on one side scores `characters.len()`, the worst possible
/// value, so it is never preferred over a genuine split.
///
/// # Examples
/// ```
/// use guesswho::core::Board;
/// use guesswho::solver::balance::select_most_balanced;
///
/// let board = Board::from_rows(
///     vec!["Glasses".into(), "Hat".into()],
///     vec![
///         ("Alice".into(), vec![true, false]),
///         ("Bob".into(), vec![true, true]),
///         ("Carol".into(), vec![false, false]),
///     ],
/// )
/// .unwrap();
///
/// // Glasses splits 2/1, Hat splits 1/2: tied, lowest id wins.
/// let best = select_most_balanced(&board, &[0, 1, 2], &[0, 1]);
/// assert_eq!(best, Some((0, 1)));
/// ```
#[must_use]
pub fn select_most_balanced(
    board: &Board,
    characters: &[usize],
    available: &[usize],
) -> Option<(usize, usize)> {
    available
        .par_iter()
        .map(|&attribute| {
            let (with, without) = split_counts(board, characters, attribute);
            (with.abs_diff(without), attribute)
        })
        .min()
        .map(|(score, attribute)| (attribute, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // a0 splits 3/1, a1 splits 2/2, a2 splits 2/2, a3 splits 4/0
        Board::from_rows(
            vec!["a0".into(), "a1".into(), "a2".into(), "a3".into()],
            vec![
                ("A".into(), vec![true, true, true, true]),
                ("B".into(), vec![true, true, false, true]),
                ("C".into(), vec![true, false, true, true]),
                ("D".into(), vec![false, false, false, true]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn split_counts_basic() {
        let board = board();
        assert_eq!(split_counts(&board, &[0, 1, 2, 3], 0), (3, 1));
        assert_eq!(split_counts(&board, &[0, 1, 2, 3], 1), (2, 2));
        assert_eq!(split_counts(&board, &[0, 1, 2, 3], 3), (4, 0));
    }

    #[test]
    fn split_counts_subset() {
        let board = board();
        // Among {C, D} attribute a0 splits 1/1
        assert_eq!(split_counts(&board, &[2, 3], 0), (1, 1));
    }

    #[test]
    fn most_balanced_wins() {
        let board = board();
        let best = select_most_balanced(&board, &[0, 1, 2, 3], &[0, 1, 3]);
        assert_eq!(best, Some((1, 0)));
    }

    #[test]
    fn ties_break_to_lowest_id() {
        let board = board();
        // a1 and a2 both split 2/2
        let best = select_most_balanced(&board, &[0, 1, 2, 3], &[1, 2]);
        assert_eq!(best, Some((1, 0)));
        let best = select_most_balanced(&board, &[0, 1, 2, 3], &[2, 1]);
        assert_eq!(best, Some((1, 0)));
    }

    #[test]
    fn degenerate_split_scores_worst() {
        let board = board();
        // a3 puts all four characters on one side
        let best = select_most_balanced(&board, &[0, 1, 2, 3], &[3]);
        assert_eq!(best, Some((3, 4)));
    }

    #[test]
    fn empty_pool_returns_none() {
        let board = board();
        assert_eq!(select_most_balanced(&board, &[0, 1], &[]), None);
    }
}
