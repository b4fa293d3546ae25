//! Character board
//!
//! A Board stores the boolean character × attribute matrix along with the
//! character and attribute name tables. Indices into the name tables are the
//! ids used everywhere else in the crate.

use rustc_hash::FxHashMap;
use std::fmt;

/// A character × attribute board
///
/// Row `c` of the matrix holds character `c`'s value for every attribute.
/// Removing a character shifts all subsequent ids down by one, so any tree
/// built against the previous id space must be discarded and rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    characters: Vec<String>,
    attributes: Vec<String>,
    matrix: Vec<Vec<bool>>,
    name_index: FxHashMap<String, usize>,
}

/// Error type for board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A character or attribute id outside the board's dimensions
    OutOfRange { character: usize, attribute: usize },
    /// A character name absent from the board
    NotFound(String),
    /// An attribute vector whose length does not match the attribute count
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                character,
                attribute,
            } => {
                write!(f, "Ids out of range: character {character}, attribute {attribute}")
            }
            Self::NotFound(name) => write!(f, "No character named '{name}' on the board"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Attribute vector must have {expected} entries, got {actual}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Build a board from attribute labels and `(name, values)` rows
    ///
    /// This is the ingestion contract the tabular-format reader satisfies:
    /// `header` holds the attribute labels, each row supplies one boolean per
    /// attribute followed by the character name.
    ///
    /// # Errors
    /// Returns `BoardError::LengthMismatch` if any row's value vector does
    /// not have exactly one entry per attribute.
    ///
    /// # Examples
    /// ```
    /// use guesswho::core::Board;
    ///
    /// let board = Board::from_rows(
    ///     vec!["Glasses".into(), "Hat".into()],
    ///     vec![
    ///         ("Alice".into(), vec![true, false]),
    ///         ("Bob".into(), vec![true, true]),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(board.character_count(), 2);
    /// assert_eq!(board.attribute_count(), 2);
    /// ```
    pub fn from_rows(
        header: Vec<String>,
        rows: Vec<(String, Vec<bool>)>,
    ) -> Result<Self, BoardError> {
        let expected = header.len();
        let mut characters = Vec::with_capacity(rows.len());
        let mut matrix = Vec::with_capacity(rows.len());

        for (name, values) in rows {
            if values.len() != expected {
                return Err(BoardError::LengthMismatch {
                    expected,
                    actual: values.len(),
                });
            }
            characters.push(name);
            matrix.push(values);
        }

        let name_index = build_name_index(&characters);

        Ok(Self {
            characters,
            attributes: header,
            matrix,
            name_index,
        })
    }

    /// Decompose the board into attribute labels and `(name, values)` rows
    ///
    /// Inverse of [`Board::from_rows`], used for serialization.
    #[must_use]
    pub fn to_rows(&self) -> (Vec<String>, Vec<(String, Vec<bool>)>) {
        let rows = self
            .characters
            .iter()
            .cloned()
            .zip(self.matrix.iter().cloned())
            .collect();
        (self.attributes.clone(), rows)
    }

    /// Number of attributes (columns)
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Number of characters (rows)
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Whether a character has an attribute, with id validation
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if either id is outside the board.
    pub fn has_attribute(&self, character: usize, attribute: usize) -> Result<bool, BoardError> {
        if character >= self.character_count() || attribute >= self.attribute_count() {
            return Err(BoardError::OutOfRange {
                character,
                attribute,
            });
        }
        Ok(self.matrix[character][attribute])
    }

    /// Whether a character has an attribute, unchecked
    ///
    /// # Panics
    /// Panics if either id is outside the board. Callers iterating over
    /// `0..character_count()` / `0..attribute_count()` are always in range.
    #[inline]
    #[must_use]
    pub fn value(&self, character: usize, attribute: usize) -> bool {
        self.matrix[character][attribute]
    }

    /// Character names in id order
    #[must_use]
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// Attribute labels in id order
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Name of a character id, if in range
    #[must_use]
    pub fn character_name(&self, character: usize) -> Option<&str> {
        self.characters.get(character).map(String::as_str)
    }

    /// Label of an attribute id, if in range
    #[must_use]
    pub fn attribute_name(&self, attribute: usize) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    /// Remove a character by name
    ///
    /// Shifts every subsequent character id down by one: trees built before
    /// the removal refer to the old id space and must be rebuilt.
    ///
    /// # Errors
    /// Returns `BoardError::NotFound` if no character has that name.
    pub fn remove_character(&mut self, name: &str) -> Result<(), BoardError> {
        let Some(&id) = self.name_index.get(name) else {
            return Err(BoardError::NotFound(name.to_string()));
        };
        self.characters.remove(id);
        self.matrix.remove(id);
        self.name_index = build_name_index(&self.characters);
        Ok(())
    }

    /// Append a character with the given attribute values
    ///
    /// # Errors
    /// Returns `BoardError::LengthMismatch` if `values` does not have exactly
    /// one entry per attribute.
    pub fn add_character(&mut self, name: String, values: Vec<bool>) -> Result<(), BoardError> {
        if values.len() != self.attribute_count() {
            return Err(BoardError::LengthMismatch {
                expected: self.attribute_count(),
                actual: values.len(),
            });
        }
        self.name_index.insert(name.clone(), self.characters.len());
        self.characters.push(name);
        self.matrix.push(values);
        Ok(())
    }
}

fn build_name_index(characters: &[String]) -> FxHashMap<String, usize> {
    characters
        .iter()
        .enumerate()
        .map(|(id, name)| (name.clone(), id))
        .collect()
}
