use crate::ast::Name;
use serde::Serialize;

/// A reference to a type by name, as used in type conditions and variable
/// type annotations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
}
