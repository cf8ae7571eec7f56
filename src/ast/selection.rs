use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use serde::Serialize;

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}
