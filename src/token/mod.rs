//! Token types produced by the tokenizer.

mod punctuator;
mod token;
mod token_kind;

pub use punctuator::Punctuator;
pub use token::Token;
pub use token_kind::TokenKind;
