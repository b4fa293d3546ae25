//! Board loading and serialization
//!
//! Tab-separated format: a header row of attribute labels with a final
//! name-column label, then one row per character with `1`/`0` per attribute
//! followed by the character name.

use crate::core::Board;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for reading a board
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// The content is not a well-formed board table
    Format { line: usize, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read board: {err}"),
            Self::Format { line, message } => {
                write!(f, "Bad board data on line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parse a board from tab-separated text
///
/// # Errors
/// Returns `LoadError::Format` if the header has no attribute columns, a row
/// has the wrong number of fields, or an attribute cell is not `1` or `0`.
pub fn parse_tsv(content: &str) -> Result<Board, LoadError> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Err(LoadError::Format {
            line: 1,
            message: "missing header row".into(),
        });
    };

    let mut header: Vec<String> = header_line.split('\t').map(str::to_string).collect();
    if header.len() < 2 {
        return Err(LoadError::Format {
            line: 1,
            message: "header needs at least one attribute and a name column".into(),
        });
    }
    // Last header cell labels the name column, not an attribute
    header.pop();

    let mut rows = Vec::new();
    for (index, line) in lines {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != header.len() + 1 {
            return Err(LoadError::Format {
                line: index + 1,
                message: format!(
                    "expected {} fields, got {}",
                    header.len() + 1,
                    fields.len()
                ),
            });
        }

        let mut values = Vec::with_capacity(header.len());
        for field in &fields[..header.len()] {
            match field.trim() {
                "1" => values.push(true),
                "0" => values.push(false),
                other => {
                    return Err(LoadError::Format {
                        line: index + 1,
                        message: format!("attribute cell must be 1 or 0, got '{other}'"),
                    });
                }
            }
        }
        rows.push((fields[header.len()].trim().to_string(), values));
    }

    Board::from_rows(header, rows).map_err(|err| LoadError::Format {
        line: 0,
        message: err.to_string(),
    })
}

/// Load a board from a file
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read, or any `parse_tsv`
/// format error.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_tsv(&content)
}

/// Serialize a board to tab-separated text
///
/// Inverse of [`parse_tsv`]; the name column is labeled `Name`.
#[must_use]
pub fn to_tsv(board: &Board) -> String {
    let (header, rows) = board.to_rows();
    let mut out = String::new();

    out.push_str(&header.join("\t"));
    out.push_str("\tName\n");

    for (name, values) in rows {
        for value in values {
            out.push(if value { '1' } else { '0' });
            out.push('\t');
        }
        out.push_str(&name);
        out.push('\n');
    }
    out
}

/// Write a board to a file in tab-separated format
///
/// # Errors
/// Returns an I/O error if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(board: &Board, path: P) -> io::Result<()> {
    fs::write(path, to_tsv(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "Glasses\tHat\tName\n1\t0\tAlice\n1\t1\tBob\n0\t0\tCarol\n";

    #[test]
    fn parse_small_board() {
        let board = parse_tsv(SMALL).unwrap();
        assert_eq!(board.attribute_count(), 2);
        assert_eq!(board.character_count(), 3);
        assert_eq!(board.attributes(), &["Glasses".to_string(), "Hat".to_string()]);
        assert_eq!(board.character_name(2), Some("Carol"));
        assert!(board.value(1, 1));
        assert!(!board.value(0, 1));
    }

    #[test]
    fn parse_skips_blank_lines() {
        let content = format!("\n{SMALL}\n\n");
        let board = parse_tsv(&content).unwrap();
        assert_eq!(board.character_count(), 3);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            parse_tsv(""),
            Err(LoadError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_header_without_attributes() {
        assert!(matches!(
            parse_tsv("Name\nAlice\n"),
            Err(LoadError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_short_row() {
        let content = "Glasses\tHat\tName\n1\tAlice\n";
        assert!(matches!(
            parse_tsv(content),
            Err(LoadError::Format { line: 2, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_boolean_cell() {
        let content = "Glasses\tHat\tName\n1\t2\tAlice\n";
        let err = parse_tsv(content).unwrap_err();
        let LoadError::Format { line, message } = err else {
            panic!("expected a format error");
        };
        assert_eq!(line, 2);
        assert!(message.contains('2'));
    }

    #[test]
    fn tsv_roundtrip() {
        let board = parse_tsv(SMALL).unwrap();
        let rebuilt = parse_tsv(&to_tsv(&board)).unwrap();
        assert_eq!(board, rebuilt);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("definitely/not/a/board.tsv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
