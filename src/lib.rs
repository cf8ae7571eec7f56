//! A strict, fail-fast parser for GraphQL executable documents (queries,
//! mutations, subscriptions, and fragment definitions).
//!
//! The crate is a two-stage front end:
//!
//! - [`tokenize`] converts raw text into an ordered sequence of
//!   [`Token`](token::Token)s with 1-indexed source positions.
//! - [`parse`] runs the tokenizer and then a recursive descent parser with
//!   single-token lookahead, producing a [`Document`](ast::Document) whose
//!   node shapes mirror the reference GraphQL grammar.
//!
//! Both stages are pure functions over in-memory data: no I/O, no global
//! state, no error recovery. The first grammar violation aborts the parse
//! with a [`SyntaxError`]; callers receive either a complete AST or an
//! error, never a partial tree.
//!
//! # Example
//!
//! ```
//! use graphql_query_parser::ast;
//!
//! let doc = graphql_query_parser::parse("{ hero { name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
//! ```

pub mod ast;
mod parser;
mod source_position;
mod syntax_error;
pub mod token;
mod tokenizer;

pub use parser::Parser;
pub use source_position::SourcePosition;
pub use syntax_error::SyntaxError;
pub use tokenizer::tokenize;

use ast::Document;

/// Parses a GraphQL executable document into a [`Document`] AST.
///
/// Runs [`tokenize`] over the full input, then drives [`Parser`] over the
/// resulting token sequence. The returned AST borrows string data from
/// `text` wherever the source needed no decoding.
///
/// # Errors
///
/// Returns a [`SyntaxError`] on the first lexical or grammatical violation.
pub fn parse(text: &str) -> Result<Document<'_>, SyntaxError> {
    let tokens = tokenize(text)?;
    Parser::new(tokens).parse_document()
}

#[cfg(test)]
mod tests;
