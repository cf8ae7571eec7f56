//! Single-pass tokenizer for GraphQL executable documents.
//!
//! [`tokenize`] drives a single forward-only cursor over the input. At each
//! position the token classes are tried in strict priority order and the
//! first match wins; there is no backtracking. Space, tab, newline, and
//! comma are insignificant separators (comma is *not* a token, per the
//! GraphQL convention that commas are optional), and `#` begins a line
//! comment consumed through end-of-line.

use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use crate::SyntaxError;
use memchr::memchr;
use memchr::memchr3;
use std::borrow::Cow;

/// Converts raw text into an ordered token sequence.
///
/// Tokens borrow their lexemes from `text` (zero-copy), except string
/// literals containing escape sequences, whose decoded content must be
/// allocated. Each token records the 1-indexed line and column of its
/// first character.
///
/// # Errors
///
/// Fails with a [`SyntaxError`] carrying the offending character/byte
/// offset when an unrecognized character is encountered, when a string
/// literal is unterminated or contains an invalid escape, or when a lone
/// `.` appears without two following `.` characters.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    Tokenizer::new(text).run()
}

/// Forward-only cursor over the source text with incremental line/column
/// tracking.
struct Tokenizer<'src> {
    src: &'src str,
    /// Byte offset into `src` (0-based).
    pos: usize,
    /// Current line (1-based).
    line: usize,
    /// Current column in characters (1-based).
    col: usize,
}

impl<'src> Tokenizer<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn run(mut self) -> Result<Vec<Token<'src>>, SyntaxError> {
        let mut tokens = Vec::new();

        while self.pos < self.src.len() {
            if self.skip_insignificant() {
                continue;
            }

            let position = self.position();
            let kind = match self.src.as_bytes()[self.pos] {
                b'.' => self.lex_spread()?,
                b'"' => self.lex_string()?,
                b'_' | b'A'..=b'Z' | b'a'..=b'z' => self.lex_name(),
                b'-' | b'0'..=b'9' => self.lex_number(),
                byte => match Punctuator::from_byte(byte) {
                    Some(punctuator) => {
                        self.bump_ascii();
                        TokenKind::Punctuator(punctuator)
                    }
                    None => {
                        return Err(SyntaxError::UnexpectedCharacter {
                            ch: self.current_char(),
                            offset: self.pos,
                        });
                    }
                },
            };
            tokens.push(Token::new(kind, position));
        }

        Ok(tokens)
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// The position of the byte currently under the cursor.
    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col)
    }

    /// The character currently under the cursor. `pos` always sits on a
    /// character boundary; the replacement character covers the
    /// unreachable end-of-input case.
    fn current_char(&self) -> char {
        self.src[self.pos..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Advances past one ASCII byte.
    fn bump_ascii(&mut self) {
        self.pos += 1;
        self.col += 1;
    }

    /// Advances past a newline, moving to column 1 of the next line.
    fn bump_newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.col = 1;
    }

    /// Advances past an arbitrary slice that contains no newlines, counting
    /// one column per character.
    fn bump_over(&mut self, slice: &str) {
        self.pos += slice.len();
        self.col += slice.chars().count();
    }

    // =========================================================================
    // Token classes, in match priority order
    // =========================================================================

    /// Skips one unit of insignificant content: a space, tab, newline, or
    /// comma, or an entire `#` line comment. Returns `false` when the
    /// cursor sits on significant content.
    fn skip_insignificant(&mut self) -> bool {
        match self.src.as_bytes()[self.pos] {
            b' ' | b'\t' | b',' => {
                self.bump_ascii();
                true
            }
            b'\n' => {
                self.bump_newline();
                true
            }
            b'#' => {
                // Consume through end-of-line or end-of-input. The newline
                // itself is left for the whitespace arm so line/column
                // bookkeeping stays in one place.
                let rest = &self.src[self.pos..];
                let comment = match memchr(b'\n', rest.as_bytes()) {
                    Some(newline_index) => &rest[..newline_index],
                    None => rest,
                };
                self.bump_over(comment);
                true
            }
            _ => false,
        }
    }

    /// Lexes the three-character `...` spread operator.
    ///
    /// A single `.` not followed by two more `.` is a syntax error; no
    /// other token class can begin with a dot.
    fn lex_spread(&mut self) -> Result<TokenKind<'src>, SyntaxError> {
        if self.src.as_bytes()[self.pos..].starts_with(b"...") {
            self.pos += 3;
            self.col += 3;
            Ok(TokenKind::Punctuator(Punctuator::Ellipsis))
        } else {
            Err(SyntaxError::IncompleteSpread { offset: self.pos })
        }
    }

    /// Lexes a name: `[_A-Za-z][_0-9A-Za-z]*`, greedy.
    fn lex_name(&mut self) -> TokenKind<'src> {
        let start = self.pos;
        self.bump_ascii();
        while self.pos < self.src.len()
            && matches!(
                self.src.as_bytes()[self.pos],
                b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z'
            )
        {
            self.bump_ascii();
        }
        TokenKind::Name(Cow::Borrowed(&self.src[start..self.pos]))
    }

    /// Lexes an int or float literal, storing the lexeme verbatim.
    ///
    /// An optional leading `-` and digits form the integer part. A
    /// following `.`, `e`, or `E` marks the literal as a float, after
    /// which digit/sign/exponent characters are consumed greedily. The
    /// presence of the float marker is the *only* thing distinguishing
    /// `IntValue` from `FloatValue`.
    fn lex_number(&mut self) -> TokenKind<'src> {
        let start = self.pos;

        // Leading `-` or first digit.
        self.bump_ascii();

        while self.pos < self.src.len()
            && self.src.as_bytes()[self.pos].is_ascii_digit()
        {
            self.bump_ascii();
        }

        let is_float = self.pos < self.src.len()
            && matches!(self.src.as_bytes()[self.pos], b'.' | b'e' | b'E');
        if is_float {
            self.bump_ascii();
            while self.pos < self.src.len()
                && matches!(
                    self.src.as_bytes()[self.pos],
                    b'0'..=b'9' | b'e' | b'E' | b'+' | b'-'
                )
            {
                self.bump_ascii();
            }
            TokenKind::FloatValue(Cow::Borrowed(&self.src[start..self.pos]))
        } else {
            TokenKind::IntValue(Cow::Borrowed(&self.src[start..self.pos]))
        }
    }

    /// Lexes a `"`-delimited string literal, producing the decoded content.
    ///
    /// The scan jumps between interesting bytes (`"`, `\`, newline) with
    /// `memchr3`. A string literal never spans lines: a raw line
    /// terminator before the closing quote leaves the literal
    /// unterminated (a newline in the value must be spelled `\n`).
    /// Literals with no escapes borrow their content directly from the
    /// source; otherwise the escapes are decoded into an owned string.
    fn lex_string(&mut self) -> Result<TokenKind<'src>, SyntaxError> {
        let quote_offset = self.pos;
        self.bump_ascii();
        let content_start = self.pos;
        let mut has_escape = false;

        loop {
            let rest = &self.src[self.pos..];
            let Some(index) = memchr3(b'"', b'\\', b'\n', rest.as_bytes())
            else {
                return Err(SyntaxError::UnterminatedString {
                    offset: quote_offset,
                });
            };
            let chunk = &rest[..index];
            // memchr3 is limited to three needles; `\r` needs its own
            // scan over the skipped chunk.
            if memchr(b'\r', chunk.as_bytes()).is_some() {
                return Err(SyntaxError::UnterminatedString {
                    offset: quote_offset,
                });
            }
            self.bump_over(chunk);

            match self.src.as_bytes()[self.pos] {
                b'"' => {
                    let raw = &self.src[content_start..self.pos];
                    self.bump_ascii();
                    return if has_escape {
                        let decoded = decode_escapes(raw, content_start)?;
                        Ok(TokenKind::StringValue(Cow::Owned(decoded)))
                    } else {
                        Ok(TokenKind::StringValue(Cow::Borrowed(raw)))
                    };
                }
                b'\\' => {
                    has_escape = true;
                    self.bump_ascii();
                    // The escaped character is consumed blindly here; it is
                    // validated by decode_escapes() once the closing quote
                    // is found.
                    match self.src[self.pos..].chars().next() {
                        None | Some('\n') | Some('\r') => {
                            return Err(SyntaxError::UnterminatedString {
                                offset: quote_offset,
                            });
                        }
                        Some(ch) => {
                            self.pos += ch.len_utf8();
                            self.col += 1;
                        }
                    }
                }
                // A raw `\n` under the cursor: the literal is unterminated.
                _ => {
                    return Err(SyntaxError::UnterminatedString {
                        offset: quote_offset,
                    });
                }
            }
        }
    }
}

// =============================================================================
// String escape decoding
// =============================================================================

/// Decodes the JSON-style escape sequences of a raw (quote-stripped) string
/// literal body.
///
/// Handles `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, including UTF-16
/// surrogate pairs spelled as two consecutive `\uXXXX` escapes.
/// `base_offset` is the byte offset of the literal body within the whole
/// document, used to report escape errors at their absolute position.
fn decode_escapes(raw: &str, base_offset: usize) -> Result<String, SyntaxError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        let invalid = |sequence: String| SyntaxError::InvalidEscape {
            sequence,
            offset: base_offset + index,
        };

        match chars.next() {
            Some((_, '"')) => decoded.push('"'),
            Some((_, '\\')) => decoded.push('\\'),
            Some((_, '/')) => decoded.push('/'),
            Some((_, 'b')) => decoded.push('\u{0008}'),
            Some((_, 'f')) => decoded.push('\u{000C}'),
            Some((_, 'n')) => decoded.push('\n'),
            Some((_, 'r')) => decoded.push('\r'),
            Some((_, 't')) => decoded.push('\t'),
            Some((_, 'u')) => {
                let unit = hex4(&mut chars)
                    .ok_or_else(|| invalid("\\u".to_string()))?;
                if (0xD800..=0xDBFF).contains(&unit) {
                    // High surrogate: a second \uXXXX low surrogate must
                    // follow, and the pair combines into one code point.
                    if !matches!(chars.next(), Some((_, '\\')))
                        || !matches!(chars.next(), Some((_, 'u')))
                    {
                        return Err(invalid(format!("\\u{unit:04X}")));
                    }
                    let low = hex4(&mut chars)
                        .filter(|low| (0xDC00..=0xDFFF).contains(low))
                        .ok_or_else(|| invalid(format!("\\u{unit:04X}")))?;
                    let code_point =
                        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    match char::from_u32(code_point) {
                        Some(decoded_char) => decoded.push(decoded_char),
                        None => {
                            return Err(invalid(format!("\\u{unit:04X}")));
                        }
                    }
                } else {
                    match char::from_u32(unit) {
                        Some(decoded_char) => decoded.push(decoded_char),
                        None => {
                            return Err(invalid(format!("\\u{unit:04X}")));
                        }
                    }
                }
            }
            Some((_, other)) => return Err(invalid(format!("\\{other}"))),
            None => return Err(invalid("\\".to_string())),
        }
    }

    Ok(decoded)
}

/// Reads exactly four hex digits from `chars`, returning their value.
fn hex4(chars: &mut std::str::CharIndices) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let (_, ch) = chars.next()?;
        value = (value << 4) | ch.to_digit(16)?;
    }
    Some(value)
}
