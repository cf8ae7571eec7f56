use crate::ast::Selection;
use serde::Serialize;

/// A braced group of selections inside an operation or fragment.
///
/// Never empty once parsed: `{ }` is a syntax error, and where the grammar
/// makes a selection set optional its absence is represented as `None`,
/// not as an empty set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
}
