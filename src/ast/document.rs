use crate::ast::Definition;
use serde::Serialize;

/// A complete executable document: one or more definitions in source
/// order.
///
/// See [Document](https://spec.graphql.org/September2025/#sec-Document) in
/// the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
}
