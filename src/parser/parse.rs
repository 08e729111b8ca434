//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing statements (print, assignment, blocks, if, while, def, calls)
//! - `expressions`: Parsing expressions, one method per precedence layer
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::constants::{MAX_NESTING_DEPTH, PARSER_BASE_STACK, PARSER_STACK_PER_LEVEL};
use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;
use std::thread;
use tracing::{debug, warn};

/// The single failure of the parsing stage.
///
/// Lexical mismatches, grammatical mismatches and unconsumed trailing input
/// all end up here; there is never a partial tree alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "parse error at line {}, column {}: expected {expected}, found {found}",
    .location.line,
    .location.column
)]
pub struct ParseError {
    pub location: SourceLocation,
    pub expected: String,
    pub found: String,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            location: err.location,
            expected: err.expected,
            found: err.found,
        }
    }
}

/// Parses `source` as one MustScript statement.
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    Parser::new(source)?.parse_program()
}

/// Recursive descent parser for MustScript
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) builder: AstBuilder,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        debug!(tokens = tokens.len(), "tokenized source");
        Ok(Self {
            tokens,
            position: 0,
            builder: AstBuilder::new(),
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
        })
    }

    /// Limit on nested statements and expressions before parsing gives up.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the entire program: exactly one statement followed by end of input.
    ///
    /// Descent runs on a dedicated thread whose stack is sized from
    /// `max_depth`, so the nesting limit is reached before the stack runs out.
    pub fn parse_program(mut self) -> Result<Ast, ParseError> {
        let stack_size = PARSER_STACK_PER_LEVEL
            .saturating_mul(self.max_depth)
            .saturating_add(PARSER_BASE_STACK);

        let spawned = thread::scope(|scope| {
            thread::Builder::new()
                .name("mustfacts-parser".to_string())
                .stack_size(stack_size)
                .spawn_scoped(scope, || self.parse_root())
                .map(|handle| handle.join())
        });

        let root = match spawned {
            Ok(Ok(result)) => result?,
            Ok(Err(panic)) => std::panic::resume_unwind(panic),
            Err(err) => {
                warn!(
                    %err,
                    stack_size,
                    "could not start parser thread, parsing on the caller's stack"
                );
                self.parse_root()?
            }
        };

        debug!(nodes = self.builder.len(), "parsed program");
        Ok(self.builder.finish(root))
    }

    fn parse_root(&mut self) -> Result<NodeId, ParseError> {
        let root = self.parse_statement()?;

        if !self.is_at_end() {
            return Err(self.error("end of input"));
        }

        Ok(root)
    }

    // ===== Helper methods =====

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.builder.push(node)
    }

    /// Runs `f` one nesting level deeper, failing once `max_depth` is exceeded.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(&format!("nesting depth at most {}", self.max_depth)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn error(&self, expected: &str) -> ParseError {
        ParseError {
            location: self.current_location(),
            expected: expected.to_string(),
            found: self.peek().to_string(),
        }
    }

    pub(crate) fn expect_token(&mut self, token: &Token, expected: &str) -> Result<(), ParseError> {
        if self.match_token(token) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&Token::LParen(self.current_location()), &format!("'(' {ctx}"))
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&Token::RParen(self.current_location()), &format!("')' {ctx}"))
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&Token::Semicolon(self.current_location()), &format!("';' {ctx}"))
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error(&format!("identifier {ctx}")))
        }
    }

    /// Parses `Exp,*` up to and including `close`. An empty list is allowed,
    /// a trailing comma is not.
    pub(crate) fn parse_expression_list(
        &mut self,
        close: &Token,
        ctx: &str,
    ) -> Result<Vec<NodeId>, ParseError> {
        let mut items = Vec::new();

        if !self.check(close) {
            loop {
                items.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma(self.current_location())) {
                    break;
                }
            }
        }

        self.expect_token(close, &format!("',' or {} {ctx}", close))?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_statement() {
        let ast = parse("print 1;").unwrap();

        assert_eq!(ast.len(), 2);
        match ast.root_node() {
            Node::Print { exp } => {
                assert_eq!(ast.get(*exp), &Node::Int { value: "1".into() })
            }
            other => panic!("Expected print statement, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_rejected() {
        let err = parse("print 1; print 2;").unwrap_err();
        assert_eq!(err.expected, "end of input");
        assert_eq!(err.found, "'print'");
        assert_eq!(err.location, SourceLocation::new(1, 10));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = parse("  # nothing here\n").unwrap_err();
        assert_eq!(err.found, "end of file");
    }

    #[test]
    fn test_lex_error_becomes_parse_error() {
        let err = parse("print @;").unwrap_err();
        assert_eq!(err.found, "character '@'");
        assert_eq!(
            err.to_string(),
            "parse error at line 1, column 7: expected a token, found character '@'"
        );
    }

    #[test]
    fn test_depth_limit() {
        let source = format!("print {}1{};", "(".repeat(10), ")".repeat(10));
        assert!(Parser::new(&source).unwrap().with_max_depth(64).parse_program().is_ok());

        let err = Parser::new(&source)
            .unwrap()
            .with_max_depth(5)
            .parse_program()
            .unwrap_err();
        assert_eq!(err.expected, "nesting depth at most 5");
    }
}
