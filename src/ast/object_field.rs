use crate::ast::Name;
use crate::ast::Value;
use serde::Serialize;

/// One `name: value` entry of an object value literal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
}
