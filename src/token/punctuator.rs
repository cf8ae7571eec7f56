use serde::Serialize;
use std::fmt;

/// The closed set of GraphQL punctuators recognized by the tokenizer.
///
/// All punctuators are a single character except [`Punctuator::Ellipsis`]
/// (`...`). A lone `.` in the source is a syntax error, never a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Punctuator {
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
}

impl Punctuator {
    /// Maps a single byte to its punctuator, if it is one.
    ///
    /// `.` is not mapped here: the spread operator is three characters and
    /// the tokenizer handles it separately.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'!' => Some(Punctuator::Bang),
            b'$' => Some(Punctuator::Dollar),
            b'(' => Some(Punctuator::ParenOpen),
            b')' => Some(Punctuator::ParenClose),
            b':' => Some(Punctuator::Colon),
            b'=' => Some(Punctuator::Equals),
            b'@' => Some(Punctuator::At),
            b'[' => Some(Punctuator::SquareBracketOpen),
            b']' => Some(Punctuator::SquareBracketClose),
            b'{' => Some(Punctuator::CurlyBraceOpen),
            b'}' => Some(Punctuator::CurlyBraceClose),
            _ => None,
        }
    }

    /// Returns the source text of this punctuator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuator::Bang => "!",
            Punctuator::Dollar => "$",
            Punctuator::ParenOpen => "(",
            Punctuator::ParenClose => ")",
            Punctuator::Ellipsis => "...",
            Punctuator::Colon => ":",
            Punctuator::Equals => "=",
            Punctuator::At => "@",
            Punctuator::SquareBracketOpen => "[",
            Punctuator::SquareBracketClose => "]",
            Punctuator::CurlyBraceOpen => "{",
            Punctuator::CurlyBraceClose => "}",
        }
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
