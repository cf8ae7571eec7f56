use crate::ast::Argument;
use crate::ast::Name;
use serde::Serialize;

/// An `@name(args)` annotation.
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}
