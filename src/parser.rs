//! Recursive descent parser for GraphQL executable documents.
//!
//! [`Parser`] consumes a fully materialized token sequence via single-token
//! lookahead. Every grammar ambiguity is resolved by inspecting the current
//! token only: a leading `Name` equal to `query`/`mutation`/`subscription`/
//! `fragment` versus a bare `{` shorthand, a field's leading `Name` being
//! an alias versus a plain field name (decided by a following `:`), and a
//! `...` introducing an inline fragment versus a fragment spread.
//!
//! The lookahead primitives come in two flavors, never exception-driven:
//!
//! - `eat_*` methods consume the current token only when it matches,
//!   returning the match (or `false`/`None`) — the "optional consume";
//! - `expect_*` methods consume unconditionally and fail with a
//!   [`SyntaxError`] identifying the found token, the expectation, and the
//!   source position — the "required consume".
//!
//! There is no error recovery: the first violation aborts the parse. The
//! parser's only state is its cursor over the token sequence, so recursion
//! depth mirrors AST nesting depth.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::token::Punctuator;
use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use crate::SyntaxError;
use std::iter::Peekable;
use std::vec;

/// A single-pass, fail-fast parser over an owned token sequence.
///
/// Each parse call owns its token sequence and cursor; there is no shared
/// or global state, so concurrent parses of independent documents are
/// trivially safe.
///
/// # Usage
///
/// ```
/// use graphql_query_parser::Parser;
/// use graphql_query_parser::tokenize;
///
/// let tokens = tokenize("{ hero { name } }").unwrap();
/// let doc = Parser::new(tokens).parse_document().unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct Parser<'src> {
    tokens: Peekable<vec::IntoIter<Token<'src>>>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over a token sequence produced by
    /// [`tokenize`](crate::tokenize).
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Parses the entire token sequence as a document of one or more
    /// definitions.
    ///
    /// Consumes `self`: the parser is single-use, mirroring the one-shot
    /// nature of the token sequence it owns. Trailing garbage is
    /// impossible by construction — the definition loop runs until the
    /// sequence is exhausted and anything unparseable fails.
    pub fn parse_document(mut self) -> Result<Document<'src>, SyntaxError> {
        if self.is_at_end() {
            return Err(SyntaxError::UnexpectedEof {
                expected: "a definition".to_string(),
            });
        }

        let mut definitions = Vec::new();
        while !self.is_at_end() {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions })
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Parses one top-level definition.
    ///
    /// An optional leading `Name` decides the form. Absent (i.e. a bare
    /// `{`), the definition is an anonymous shorthand query with no name
    /// and — crucially — *no* variable-definitions clause (`None`, as
    /// opposed to a keyword-led operation's `Some(vec![])`), matching the
    /// reference AST's three-way distinction.
    fn parse_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let Some(keyword) = self.eat_name_token() else {
            return Ok(Definition::Operation(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: None,
                directives: self.parse_directives()?,
                selection_set: self.parse_selection_set()?,
            }));
        };

        match keyword.kind.lexeme() {
            "query" => self.parse_operation_definition(OperationKind::Query),
            "mutation" => {
                self.parse_operation_definition(OperationKind::Mutation)
            }
            "subscription" => {
                self.parse_operation_definition(OperationKind::Subscription)
            }
            "fragment" => self.parse_fragment_definition(),
            other => Err(SyntaxError::InvalidDefinitionKeyword {
                keyword: other.to_string(),
                position: keyword.position,
            }),
        }
    }

    /// Parses a keyword-led operation definition (the keyword itself has
    /// already been consumed).
    fn parse_operation_definition(
        &mut self,
        operation: OperationKind,
    ) -> Result<Definition<'src>, SyntaxError> {
        Ok(Definition::Operation(OperationDefinition {
            operation,
            name: self.eat_name(),
            variable_definitions: Some(self.parse_variable_definitions()?),
            directives: self.parse_directives()?,
            selection_set: self.parse_selection_set()?,
        }))
    }

    /// Parses a fragment definition (the `fragment` keyword has already
    /// been consumed): required name, required `on` keyword, required type
    /// condition, directives, required selection set.
    fn parse_fragment_definition(
        &mut self,
    ) -> Result<Definition<'src>, SyntaxError> {
        let name = self.expect_name("a fragment name")?;
        self.expect_keyword("on")?;
        Ok(Definition::Fragment(FragmentDefinition {
            name,
            type_condition: NamedType {
                name: self.expect_name("a type name")?,
            },
            directives: self.parse_directives()?,
            selection_set: self.parse_selection_set()?,
        }))
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    /// Parses an optional parenthesized variable-definitions clause:
    /// `( ($name: Type = defaultValue)* )`. No `(` yields an empty list.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<VariableDefinition<'src>>, SyntaxError> {
        if !self.eat_punctuator(Punctuator::ParenOpen) {
            return Ok(Vec::new());
        }

        let mut definitions = Vec::new();
        while !self.eat_punctuator(Punctuator::ParenClose) {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    /// Parses one `$name: Type (= ConstValue)?` variable definition. The
    /// default value is a const context: variables inside it are rejected.
    fn parse_variable_definition(
        &mut self,
    ) -> Result<VariableDefinition<'src>, SyntaxError> {
        self.expect_punctuator(Punctuator::Dollar)?;
        let variable = self.expect_name("a variable name")?;
        self.expect_punctuator(Punctuator::Colon)?;
        let type_annotation = self.parse_type_annotation()?;

        let default_value = if self.eat_punctuator(Punctuator::Equals) {
            Some(self.parse_value(true)?)
        } else {
            None
        };

        Ok(VariableDefinition {
            variable,
            type_annotation,
            default_value,
        })
    }

    /// Parses a type annotation: `Named`, `[Type]`, or either followed by
    /// a non-null `!`.
    fn parse_type_annotation(
        &mut self,
    ) -> Result<TypeAnnotation<'src>, SyntaxError> {
        let inner = if self.eat_punctuator(Punctuator::SquareBracketOpen) {
            let item = self.parse_type_annotation()?;
            self.expect_punctuator(Punctuator::SquareBracketClose)?;
            TypeAnnotation::List(Box::new(item))
        } else {
            TypeAnnotation::Named(NamedType {
                name: self.expect_name("a type name")?,
            })
        };

        Ok(if self.eat_punctuator(Punctuator::Bang) {
            TypeAnnotation::NonNull(Box::new(inner))
        } else {
            inner
        })
    }

    // =========================================================================
    // Directives and selection sets
    // =========================================================================

    /// Parses zero or more `@name(arguments)` clauses.
    fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, SyntaxError> {
        let mut directives = Vec::new();
        while self.eat_punctuator(Punctuator::At) {
            directives.push(Directive {
                name: self.expect_name("a directive name")?,
                arguments: self.parse_arguments()?,
            });
        }
        Ok(directives)
    }

    /// Parses a required `{ Selection+ }` selection set. An empty `{ }` is
    /// a syntax error, never an empty sequence.
    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, SyntaxError> {
        let open_position =
            self.expect_punctuator(Punctuator::CurlyBraceOpen)?;

        let mut selections = Vec::new();
        while !self.eat_punctuator(Punctuator::CurlyBraceClose) {
            selections.push(self.parse_selection()?);
        }

        if selections.is_empty() {
            return Err(SyntaxError::EmptySelectionSet {
                position: open_position,
            });
        }
        Ok(SelectionSet { selections })
    }

    /// Parses an optional selection set: absence of `{` yields `None`.
    fn parse_optional_selection_set(
        &mut self,
    ) -> Result<Option<SelectionSet<'src>>, SyntaxError> {
        if self.peek_is_punctuator(Punctuator::CurlyBraceOpen) {
            Ok(Some(self.parse_selection_set()?))
        } else {
            Ok(None)
        }
    }

    /// Parses one selection: a field, a fragment spread, or an inline
    /// fragment.
    fn parse_selection(&mut self) -> Result<Selection<'src>, SyntaxError> {
        if self.eat_punctuator(Punctuator::Ellipsis) {
            return self.parse_fragment_selection();
        }

        let first = self.expect_name("a field name")?;
        let (alias, name) = if self.eat_punctuator(Punctuator::Colon) {
            // The first name was an alias; the real field name follows.
            (Some(first), self.expect_name("a field name")?)
        } else {
            (None, first)
        };

        Ok(Selection::Field(Field {
            alias,
            name,
            arguments: self.parse_arguments()?,
            directives: self.parse_directives()?,
            selection_set: self.parse_optional_selection_set()?,
        }))
    }

    /// Parses the selection following a `...`: an inline fragment when the
    /// next token is the `on` keyword or any non-`Name` token, otherwise a
    /// fragment spread.
    fn parse_fragment_selection(
        &mut self,
    ) -> Result<Selection<'src>, SyntaxError> {
        if self.eat_keyword("on") {
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition: Some(NamedType {
                    name: self.expect_name("a type name")?,
                }),
                directives: self.parse_directives()?,
                selection_set: self.parse_selection_set()?,
            }));
        }

        if !self.peek_is_name() {
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition: None,
                directives: self.parse_directives()?,
                selection_set: self.parse_selection_set()?,
            }));
        }

        Ok(Selection::FragmentSpread(FragmentSpread {
            name: self.expect_name("a fragment name")?,
            directives: self.parse_directives()?,
        }))
    }

    // =========================================================================
    // Arguments and values
    // =========================================================================

    /// Parses an optional `( (Name : Value)* )` argument list.
    fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, SyntaxError> {
        if !self.eat_punctuator(Punctuator::ParenOpen) {
            return Ok(Vec::new());
        }

        let mut arguments = Vec::new();
        while !self.eat_punctuator(Punctuator::ParenClose) {
            let name = self.expect_name("an argument name")?;
            self.expect_punctuator(Punctuator::Colon)?;
            arguments.push(Argument {
                name,
                value: self.parse_value(false)?,
            });
        }
        Ok(arguments)
    }

    /// Parses one input value, dispatching on the current token.
    ///
    /// A `Name` token maps to `Boolean` when its text is exactly
    /// `true`/`false`, to `Null` when exactly `null`, and otherwise to an
    /// `Enum` whose symbol is the literal text (no validation against any
    /// enum type). With `is_const` set, a `$` here is a fatal error:
    /// constant-value contexts forbid variables.
    fn parse_value(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        let Some(token) = self.tokens.next() else {
            return Err(SyntaxError::UnexpectedEof {
                expected: "a value".to_string(),
            });
        };
        let position = token.position;

        match token.kind {
            TokenKind::IntValue(raw) => Ok(Value::Int(raw)),
            TokenKind::FloatValue(raw) => Ok(Value::Float(raw)),
            TokenKind::StringValue(decoded) => Ok(Value::String(decoded)),

            TokenKind::Name(text) => Ok(match text.as_ref() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                _ => Value::Enum(text),
            }),

            TokenKind::Punctuator(Punctuator::Dollar) => {
                if is_const {
                    return Err(SyntaxError::VariableInConstContext {
                        position,
                    });
                }
                Ok(Value::Variable(self.expect_name("a variable name")?))
            }

            TokenKind::Punctuator(Punctuator::SquareBracketOpen) => {
                let mut values = Vec::new();
                while !self.eat_punctuator(Punctuator::SquareBracketClose) {
                    values.push(self.parse_value(is_const)?);
                }
                Ok(Value::List(values))
            }

            TokenKind::Punctuator(Punctuator::CurlyBraceOpen) => {
                let mut fields = Vec::new();
                while !self.eat_punctuator(Punctuator::CurlyBraceClose) {
                    let name = self.expect_name("an object field name")?;
                    self.expect_punctuator(Punctuator::Colon)?;
                    fields.push(ObjectField {
                        name,
                        value: self.parse_value(is_const)?,
                    });
                }
                Ok(Value::Object(fields))
            }

            other => Err(SyntaxError::UnexpectedToken {
                found: other.lexeme().to_string(),
                expected: "a value".to_string(),
                position,
            }),
        }
    }

    // =========================================================================
    // Lookahead primitives
    // =========================================================================

    /// Returns `true` when the token sequence is exhausted.
    fn is_at_end(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Returns `true` when the current token is the given punctuator,
    /// without consuming it.
    fn peek_is_punctuator(&mut self, punctuator: Punctuator) -> bool {
        self.tokens
            .peek()
            .is_some_and(|token| token.kind == TokenKind::Punctuator(punctuator))
    }

    /// Returns `true` when the current token is a `Name`, without
    /// consuming it.
    fn peek_is_name(&mut self) -> bool {
        self.tokens.peek().is_some_and(|token| token.kind.is_name())
    }

    /// Consumes the current token if it is the given punctuator.
    fn eat_punctuator(&mut self, punctuator: Punctuator) -> bool {
        self.tokens
            .next_if(|token| token.kind == TokenKind::Punctuator(punctuator))
            .is_some()
    }

    /// Consumes the current token if it is a `Name`, returning it as a
    /// [`Name`] node.
    fn eat_name(&mut self) -> Option<Name<'src>> {
        let token = self.tokens.next_if(|token| token.kind.is_name())?;
        match token.kind {
            TokenKind::Name(value) => Some(Name { value }),
            _ => None,
        }
    }

    /// Consumes the current token if it is a `Name`, returning the whole
    /// token (position included).
    fn eat_name_token(&mut self) -> Option<Token<'src>> {
        self.tokens.next_if(|token| token.kind.is_name())
    }

    /// Consumes the current token if it is a `Name` with exactly the given
    /// text.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.tokens
            .next_if(|token| {
                matches!(&token.kind, TokenKind::Name(name) if name == keyword)
            })
            .is_some()
    }

    /// Consumes a required `Name` token; `expected` describes the
    /// grammatical role for the error message (e.g. "a field name").
    fn expect_name(&mut self, expected: &str) -> Result<Name<'src>, SyntaxError> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Name(value),
                ..
            }) => Ok(Name { value }),
            Some(token) => Err(SyntaxError::UnexpectedToken {
                found: token.kind.lexeme().to_string(),
                expected: expected.to_string(),
                position: token.position,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    /// Consumes a required punctuator, returning its position.
    fn expect_punctuator(
        &mut self,
        punctuator: Punctuator,
    ) -> Result<SourcePosition, SyntaxError> {
        match self.tokens.next() {
            Some(token)
                if token.kind == TokenKind::Punctuator(punctuator) =>
            {
                Ok(token.position)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                found: token.kind.lexeme().to_string(),
                expected: format!("`{punctuator}`"),
                position: token.position,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: format!("`{punctuator}`"),
            }),
        }
    }

    /// Consumes a required `Name` with exactly the given text.
    fn expect_keyword(
        &mut self,
        keyword: &'static str,
    ) -> Result<(), SyntaxError> {
        match self.tokens.next() {
            Some(token)
                if matches!(
                    &token.kind,
                    TokenKind::Name(name) if name == keyword
                ) =>
            {
                Ok(())
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                found: token.kind.lexeme().to_string(),
                expected: format!("the `{keyword}` keyword"),
                position: token.position,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: format!("the `{keyword}` keyword"),
            }),
        }
    }
}
