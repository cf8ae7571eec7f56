use crate::token::TokenKind;
use crate::SourcePosition;
use serde::Serialize;

/// A classified, positioned lexeme produced by the tokenizer.
///
/// Tokens are produced once per parse, stored as an ordered sequence, and
/// never mutated; the parser owns a read cursor over that sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token<'src> {
    /// The kind of token, carrying its lexeme.
    pub kind: TokenKind<'src>,

    /// 1-indexed line/column of the token's first character.
    pub position: SourcePosition,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind<'src>, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}
