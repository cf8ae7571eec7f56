use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use serde::Serialize;

/// A named fragment definition: `fragment Name on Type { ... }`.
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
