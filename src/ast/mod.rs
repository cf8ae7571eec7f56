//! AST types for parsed GraphQL executable documents.
//!
//! A closed set of tagged variants mirroring the reference grammar's node
//! shapes. All node types are parameterized over a `'src` lifetime that
//! borrows strings from the source text via [`Cow<'src, str>`] wherever no
//! decoding was required.
//!
//! The parser is the only constructor of these nodes: once returned, a
//! [`Document`] is an immutable value tree with no back-references and no
//! cycles. Nodes carry no source positions (positions live on tokens and
//! in errors only), so two parses of structurally identical documents
//! compare equal with plain `==`.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow

mod argument;
mod definition;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod named_type;
mod object_field;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use named_type::NamedType;
pub use object_field::ObjectField;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable_definition::VariableDefinition;
