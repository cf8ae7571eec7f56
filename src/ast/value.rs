use crate::ast::Name;
use crate::ast::ObjectField;
use serde::Serialize;
use std::borrow::Cow;

/// An input value literal.
///
/// Int and float variants preserve the source lexeme verbatim (never a
/// parsed numeric primitive) so precision is never lost; the string
/// variant holds the decoded content. An enum value is the bare symbol
/// text, unvalidated against any enum type.
///
/// See
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// in the spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value<'src> {
    Int(Cow<'src, str>),
    Float(Cow<'src, str>),
    String(Cow<'src, str>),
    Boolean(bool),
    Null,
    Enum(Cow<'src, str>),
    Variable(Name<'src>),
    List(Vec<Value<'src>>),
    Object(Vec<ObjectField<'src>>),
}

impl Value<'_> {
    /// Returns `true` if this value is or contains a variable reference.
    pub fn references_variables(&self) -> bool {
        match self {
            Value::Variable(_) => true,
            Value::List(values) => {
                values.iter().any(Value::references_variables)
            }
            Value::Object(fields) => fields
                .iter()
                .any(|field| field.value.references_variables()),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null
            | Value::Enum(_) => false,
        }
    }
}
