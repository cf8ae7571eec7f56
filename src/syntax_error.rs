use crate::SourcePosition;

/// The single error type produced by both the tokenizer and the parser.
///
/// Errors are raised synchronously and propagated immediately; there is no
/// recovery and no partial output. Every error is a deterministic function
/// of the input text: the same input always fails the same way at the same
/// position.
///
/// Tokenizer-stage variants carry a raw byte offset, since no token exists
/// yet when they are raised. Parser-stage variants carry the offending
/// token's text and its 1-indexed line/column.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    // =========================================================================
    // Tokenizer-stage errors (byte offsets, no token yet)
    // =========================================================================
    /// A character that starts no token class.
    #[error("unexpected character `{ch}` at byte offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// 0-based byte offset of the character within the input.
        offset: usize,
    },

    /// A string literal whose closing `"` was never found.
    #[error("unterminated string literal starting at byte offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening `"`.
        offset: usize,
    },

    /// A `.` that does not begin a `...` spread operator.
    #[error("expected `...` but found a lone `.` at byte offset {offset}")]
    IncompleteSpread {
        /// Byte offset of the lone `.`.
        offset: usize,
    },

    /// A backslash escape inside a string literal that is not part of the
    /// JSON-style escape repertoire.
    #[error("invalid escape sequence `{sequence}` at byte offset {offset}")]
    InvalidEscape {
        /// The offending escape text, backslash included.
        sequence: String,
        /// Byte offset of the backslash.
        offset: usize,
    },

    // =========================================================================
    // Parser-stage errors (token text + line/column)
    // =========================================================================
    /// The current token does not match what the grammar requires here.
    #[error("unexpected token `{found}` at {position}, expected {expected}")]
    UnexpectedToken {
        /// Text of the offending token.
        found: String,
        /// Description of what the grammar required.
        expected: String,
        /// Position of the offending token.
        position: SourcePosition,
    },

    /// The token sequence ended while the grammar still required input.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what the grammar required.
        expected: String,
    },

    /// A definition began with a name other than `query`, `mutation`,
    /// `subscription`, or `fragment`.
    #[error("invalid definition keyword `{keyword}` at {position}")]
    InvalidDefinitionKeyword {
        /// The offending leading name.
        keyword: String,
        /// Position of the offending name token.
        position: SourcePosition,
    },

    /// A `{ }` selection set with no selections.
    #[error("selection set at {position} must select at least one field")]
    EmptySelectionSet {
        /// Position of the opening `{`.
        position: SourcePosition,
    },

    /// A `$variable` in a position where only constant values are allowed
    /// (e.g. a variable definition's default value).
    #[error("variables are not allowed here ({position})")]
    VariableInConstContext {
        /// Position of the `$` token.
        position: SourcePosition,
    },
}
