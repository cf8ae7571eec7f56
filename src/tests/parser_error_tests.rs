//! Tests for parse failures: every error is deterministic, carries a
//! position where one exists, and aborts without a partial tree.

use crate::parse;
use crate::SourcePosition;
use crate::SyntaxError;

/// `{ x(arg: ) }` fails at the `)` token: a value was required.
#[test]
fn missing_argument_value() {
    assert_eq!(
        parse("{ x(arg: ) }"),
        Err(SyntaxError::UnexpectedToken {
            found: ")".to_string(),
            expected: "a value".to_string(),
            position: SourcePosition::new(1, 10),
        }),
    );
}

/// An empty `{ }` is a syntax error, not an empty selection set.
#[test]
fn empty_selection_set() {
    assert_eq!(
        parse("{ }"),
        Err(SyntaxError::EmptySelectionSet {
            position: SourcePosition::new(1, 1),
        }),
    );
    assert!(matches!(
        parse("{ user { } }"),
        Err(SyntaxError::EmptySelectionSet { .. }),
    ));
}

/// A definition may only start with an operation keyword, `fragment`, or
/// a bare `{`.
#[test]
fn invalid_definition_keyword() {
    assert_eq!(
        parse("type Query { x }"),
        Err(SyntaxError::InvalidDefinitionKeyword {
            keyword: "type".to_string(),
            position: SourcePosition::new(1, 1),
        }),
    );
}

/// Trailing garbage after a complete definition fails rather than being
/// ignored.
#[test]
fn trailing_garbage() {
    assert!(matches!(
        parse("{ x } trailing"),
        Err(SyntaxError::InvalidDefinitionKeyword { keyword, .. })
            if keyword == "trailing",
    ));
}

/// A fragment definition requires the `on` keyword before its type
/// condition.
#[test]
fn fragment_without_type_condition() {
    assert!(matches!(
        parse("fragment f { x }"),
        Err(SyntaxError::UnexpectedToken { found, expected, .. })
            if found == "{" && expected.contains("`on`"),
    ));
}

/// Truncated documents report end-of-input with what was required.
#[test]
fn truncated_documents() {
    assert_eq!(
        parse(""),
        Err(SyntaxError::UnexpectedEof {
            expected: "a definition".to_string(),
        }),
    );
    assert!(matches!(
        parse("{ x"),
        Err(SyntaxError::UnexpectedEof { .. }),
    ));
    assert!(matches!(
        parse("query"),
        Err(SyntaxError::UnexpectedEof { .. }),
    ));
    assert!(matches!(
        parse("{ f(a: [1, 2"),
        Err(SyntaxError::UnexpectedEof { .. }),
    ));
}

/// Tokenizer failures surface unchanged through `parse`.
#[test]
fn lexical_errors_propagate() {
    assert_eq!(
        parse("{ x(a: \"open) }"),
        Err(SyntaxError::UnterminatedString { offset: 7 }),
    );
    assert_eq!(
        parse("{ x ` }"),
        Err(SyntaxError::UnexpectedCharacter { ch: '`', offset: 4 }),
    );
}

/// The same input always fails the same way at the same position.
#[test]
fn errors_are_deterministic() {
    let source = "query Q($v: ) { x }";
    assert_eq!(parse(source), parse(source));
}

/// Error messages render the position and expectation for humans.
#[test]
fn error_display_format() {
    let error = parse("{ x(arg: ) }").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("1:10"), "unexpected message: {message}");
    assert!(message.contains("a value"), "unexpected message: {message}");

    let error = parse("{ x(a: \"open) }").unwrap_err();
    assert!(error.to_string().contains("unterminated string"));
}
