use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use serde::Serialize;

/// An unnamed fragment (`... [on Type] { ... }`) used directly inside a
/// selection set.
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#sec-Inline-Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
