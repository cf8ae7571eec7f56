//! Property tests: tokenizer purity over arbitrary input, and separator
//! insignificance over generated whitespace/comma/comment interleavings.

use crate::parse;
use crate::tokenize;
use proptest::prelude::*;

/// The lexemes of a small but representative document, to be rejoined
/// with arbitrary insignificant separators.
const PIECES: &[&str] = &[
    "query", "Q", "(", "$", "id", ":", "Int", "=", "4", ")", "{", "user",
    "(", "id", ":", "$", "id", ")", "{", "name", "}", "...", "frag", "}",
];

/// The canonical spelling: every gap is a single space.
fn canonical_source() -> String {
    PIECES.join(" ")
}

proptest! {
    /// `tokenize` is a pure function: repeated calls on identical input
    /// produce identical results, success or failure.
    #[test]
    fn tokenize_is_deterministic(input in "\\PC*") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    /// Any mix of spaces, tabs, newlines, commas, and comments between
    /// tokens parses to a document structurally identical to the
    /// canonical single-space spelling.
    #[test]
    fn separators_are_insignificant(
        separators in proptest::collection::vec(
            prop_oneof![
                Just(" "),
                Just("\t"),
                Just("\n"),
                Just(","),
                Just(",\n  "),
                Just(" # comment\n"),
            ],
            PIECES.len() - 1,
        )
    ) {
        let mut source = String::new();
        for (index, piece) in PIECES.iter().enumerate() {
            if index > 0 {
                source.push_str(separators[index - 1]);
            }
            source.push_str(piece);
        }

        let canonical = canonical_source();
        let expected = parse(&canonical).expect("canonical document parses");
        let actual = parse(&source).expect("reseparated document parses");
        prop_assert_eq!(actual, expected);
    }
}
