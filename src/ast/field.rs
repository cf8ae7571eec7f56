use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use serde::Serialize;

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl<'src> Field<'src> {
    /// The key under which this field appears in a response: the alias
    /// when present, the field name otherwise.
    pub fn response_key(&self) -> &Name<'src> {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}
