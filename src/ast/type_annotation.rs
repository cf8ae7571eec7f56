use crate::ast::NamedType;
use serde::Serialize;

/// A type annotation in a variable definition: a named type, a list
/// wrapper, or a non-null wrapper.
///
/// See
/// [Type References](https://spec.graphql.org/September2025/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TypeAnnotation<'src> {
    Named(NamedType<'src>),
    List(Box<TypeAnnotation<'src>>),
    NonNull(Box<TypeAnnotation<'src>>),
}

impl<'src> TypeAnnotation<'src> {
    /// Unwraps list/non-null wrappers down to the underlying named type.
    pub fn innermost_named_type(&self) -> &NamedType<'src> {
        match self {
            TypeAnnotation::Named(named_type) => named_type,
            TypeAnnotation::List(inner) | TypeAnnotation::NonNull(inner) => {
                inner.innermost_named_type()
            }
        }
    }
}
