//! Random board generation
//!
//! Builds a board whose rows are the binary codes of `0..characters`, so any
//! two rows differ in at least one attribute and every character stays
//! uniquely identifiable. Rows are shuffled so tree shape does not mirror
//! insertion order.

use crate::core::Board;
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a board with `characters` pairwise-distinguishable characters
///
/// Uses `ceil(log2(characters))` attributes (at least one). Row values come
/// from each character's binary code; only the row order is random.
pub fn random_board<R: Rng + ?Sized>(characters: usize, rng: &mut R) -> Board {
    let attributes = bits_needed(characters);
    let header: Vec<String> = (0..attributes)
        .map(|a| format!("Attribute {}", a + 1))
        .collect();

    let mut rows: Vec<(String, Vec<bool>)> = (0..characters)
        .map(|c| {
            let values = (0..attributes).map(|a| (c >> a) & 1 == 1).collect();
            (format!("Character {}", c + 1), values)
        })
        .collect();
    rows.shuffle(rng);

    Board::from_rows(header, rows).expect("generated rows match the header length")
}

/// Number of attributes needed to tell `characters` rows apart
fn bits_needed(characters: usize) -> usize {
    if characters <= 2 {
        1
    } else {
        (usize::BITS - (characters - 1).leading_zeros()) as usize
    }
}
