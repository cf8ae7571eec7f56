use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use serde::Serialize;

/// A query, mutation, or subscription operation.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the spec.
///
/// # Shorthand vs. keyword-led operations
///
/// Together, `name` and `variable_definitions` encode three distinct
/// states that the reference AST distinguishes:
///
/// - **named**: `name` is `Some`, `variable_definitions` is `Some`
///   (possibly empty);
/// - **keyword present, unnamed** (`query { ... }`): `name` is `None`,
///   `variable_definitions` is `Some`;
/// - **shorthand** (`{ ... }`): `name` is `None` *and*
///   `variable_definitions` is `None`, since a shorthand operation cannot
///   even carry a variable-definitions clause.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationDefinition<'src> {
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Option<Vec<VariableDefinition<'src>>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
