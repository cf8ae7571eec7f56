use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use serde::Serialize;

/// A single `$name: Type = defaultValue` entry of an operation's
/// variable-definitions clause.
///
/// The default value, when present, is a constant: variables cannot appear
/// inside it.
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDefinition<'src> {
    /// The variable's name, without the leading `$`.
    pub variable: Name<'src>,
    pub type_annotation: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
}
