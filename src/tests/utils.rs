//! Shared helpers for extracting AST shapes in tests.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;

/// Parses `source`, panicking with the error on failure.
pub fn parse_ok(source: &str) -> Document<'_> {
    crate::parse(source)
        .unwrap_or_else(|error| panic!("expected `{source}` to parse: {error}"))
}

/// Parses a document expected to hold exactly one operation definition and
/// returns it.
pub fn parse_operation(source: &str) -> OperationDefinition<'_> {
    let document = parse_ok(source);
    assert_eq!(
        document.definitions.len(),
        1,
        "expected exactly one definition in `{source}`"
    );
    match document.definitions.into_iter().next() {
        Some(Definition::Operation(operation)) => operation,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

/// Parses a document expected to hold exactly one fragment definition and
/// returns it.
pub fn parse_fragment(source: &str) -> FragmentDefinition<'_> {
    let document = parse_ok(source);
    assert_eq!(
        document.definitions.len(),
        1,
        "expected exactly one definition in `{source}`"
    );
    match document.definitions.into_iter().next() {
        Some(Definition::Fragment(fragment)) => fragment,
        other => panic!("expected a fragment definition, got {other:?}"),
    }
}

/// Parses a shorthand document and returns its top-level selection set.
pub fn parse_selection_set(source: &str) -> SelectionSet<'_> {
    parse_operation(source).selection_set
}

/// Returns the selection at `index`, which must be a field.
pub fn field_at<'a, 'src>(
    selection_set: &'a SelectionSet<'src>,
    index: usize,
) -> &'a Field<'src> {
    match &selection_set.selections[index] {
        Selection::Field(field) => field,
        other => panic!("expected a field at index {index}, got {other:?}"),
    }
}

/// Returns the first selection, which must be a field.
pub fn first_field<'a, 'src>(
    selection_set: &'a SelectionSet<'src>,
) -> &'a Field<'src> {
    field_at(selection_set, 0)
}

/// Returns the first selection, which must be a fragment spread.
pub fn first_fragment_spread<'a, 'src>(
    selection_set: &'a SelectionSet<'src>,
) -> &'a FragmentSpread<'src> {
    match &selection_set.selections[0] {
        Selection::FragmentSpread(spread) => spread,
        other => panic!("expected a fragment spread, got {other:?}"),
    }
}

/// Returns the first selection, which must be an inline fragment.
pub fn first_inline_fragment<'a, 'src>(
    selection_set: &'a SelectionSet<'src>,
) -> &'a InlineFragment<'src> {
    match &selection_set.selections[0] {
        Selection::InlineFragment(inline) => inline,
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}
