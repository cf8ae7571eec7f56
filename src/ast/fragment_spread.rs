use crate::ast::Directive;
use crate::ast::Name;
use serde::Serialize;

/// A reference (`...name`) to a separately defined, named fragment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}
