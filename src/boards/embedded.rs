//! Embedded default board
//!
//! A small classic lineup compiled into the binary so the game works with no
//! data files on hand. Same tab-separated format the loader reads from disk.

/// Default board: eight characters over five attributes, all rows distinct
pub const DEFAULT_BOARD_TSV: &str = "\
Glasses\tHat\tBeard\tBlond\tSmiling\tName
1\t0\t0\t1\t1\tAlice
1\t1\t0\t0\t0\tBob
0\t0\t0\t0\t1\tCarol
0\t1\t1\t0\t0\tDavid
1\t0\t1\t0\t1\tEmma
0\t0\t1\t1\t0\tFrank
0\t1\t0\t1\t1\tGrace
1\t1\t1\t1\t0\tHenry
";
