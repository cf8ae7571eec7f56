use crate::token::Punctuator;
use serde::Serialize;
use std::borrow::Cow;

/// The kind of a token, carrying its lexeme.
///
/// Numeric literals store only the raw source text (never a parsed numeric
/// primitive) so precision is never lost. String literals store the
/// *decoded* content, with escape sequences already resolved.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: the tokenizer borrows
/// string slices directly from the source text using `Cow::Borrowed`, and
/// only allocates (`Cow::Owned`) for string literals containing escape
/// sequences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenKind<'src> {
    /// One of the fixed punctuators, including the `...` spread.
    Punctuator(Punctuator),

    /// A name/identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including any leading `-`
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including any leading `-`
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Decoded content of a string literal, quotes stripped and escape
    /// sequences resolved (e.g. the source `"a\n"` yields `a` + newline).
    StringValue(Cow<'src, str>),
}

impl TokenKind<'_> {
    /// Returns the token's text, for diagnostics. For string literals
    /// this is the decoded content.
    pub fn lexeme(&self) -> &str {
        match self {
            TokenKind::Punctuator(punctuator) => punctuator.as_str(),
            TokenKind::Name(text)
            | TokenKind::IntValue(text)
            | TokenKind::FloatValue(text)
            | TokenKind::StringValue(text) => text,
        }
    }

    /// Returns `true` if this token is a name/identifier.
    pub fn is_name(&self) -> bool {
        matches!(self, TokenKind::Name(_))
    }
}
