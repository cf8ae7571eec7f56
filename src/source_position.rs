use serde::Serialize;
use std::fmt;

/// Source position of a token's first character.
///
/// This is a pure data struct with no mutation methods. The tokenizer is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **Both values are 1-based**, matching the convention used for locations
/// in GraphQL responses:
/// - `line`: 1 = first line of the document
/// - `col`: 1 = first character of the line
///
/// Positions exist only for diagnostics. AST nodes carry no positions, so
/// structural equality between parses is position-free by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SourcePosition {
    /// Line number (1-based: first line is 1)
    line: usize,

    /// Character count within current line (1-based: first character is 1)
    col: usize,
}

impl SourcePosition {
    /// Creates a new SourcePosition from 1-based line and column values.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based character count within the current line.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
