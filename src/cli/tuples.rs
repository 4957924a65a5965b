// Tuple List Parsing
// Grammar for passing (ciphertext, modulus) pairs on the command line

use thiserror::Error;

/// Errors from the tuple list grammar
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TupleError {
    #[error("empty tuple list")]
    Empty,

    #[error("tuple #{0} is empty")]
    EmptyTuple(usize),

    #[error("tuple #{0} has an empty element")]
    EmptyElement(usize),
}

/// Parse a tuple list like "(42,101),(42,103)" into its string elements.
///
/// Whitespace is insignificant anywhere. Parentheses around a lone tuple are
/// optional. Elements are not interpreted here; the integer and file modes
/// decide what the strings mean.
pub fn parse_tuples(text: &str) -> Result<Vec<Vec<String>>, TupleError> {
    let cleaned: String = text.split_whitespace().collect();
    if cleaned.is_empty() {
        return Err(TupleError::Empty);
    }

    let mut tuples = Vec::new();
    for (index, piece) in cleaned.split("),(").enumerate() {
        let piece = piece.strip_prefix('(').unwrap_or(piece);
        let piece = piece.strip_suffix(')').unwrap_or(piece);
        if piece.is_empty() {
            return Err(TupleError::EmptyTuple(index + 1));
        }

        let elements: Vec<String> = piece.split(',').map(str::to_owned).collect();
        if elements.iter().any(String::is_empty) {
            return Err(TupleError::EmptyElement(index + 1));
        }
        tuples.push(elements);
    }
    Ok(tuples)
}
