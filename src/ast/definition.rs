use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use serde::Serialize;

/// A top-level definition within an executable document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}
