use crate::ast::Name;
use crate::ast::Value;
use serde::Serialize;

/// A single `name: value` argument on a field or directive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
}
