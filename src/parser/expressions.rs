//! Expression parsing implementation
//!
//! One method per precedence layer, lowest binding first:
//!
//! ```text
//! exp   ::= or
//! or    ::= and ( "or" and )*
//! and   ::= not ( "and" not )*
//! not   ::= "not" not | cmp
//! cmp   ::= add ( ("==" | "<" | ">") add )*
//! add   ::= mul ( ("+" | "-") mul )*
//! mul   ::= index ( ("*" | "/") index )*
//! index ::= atom ( "[" exp "]" )*
//! atom  ::= "(" exp ")" | int | string | "[" exp,* "]" | ident
//! ```
//!
//! Every binary layer folds its `(op, operand)` pairs left to right into
//! nested `BinOpExp` nodes, so all of them are left-associative.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        self.nested(|p| p.parse_or())
    }

    /// Folds `operand (op operand)*` into left-nested `BinOpExp`s, where
    /// `op` is any operator spelled in `ops`.
    fn parse_binary_layer(
        &mut self,
        ops: &[&str],
        operand: fn(&mut Self) -> Result<NodeId, ParseError>,
    ) -> Result<NodeId, ParseError> {
        let mut left = operand(self)?;

        while let Some(op) = self.peek().operator().filter(|op| ops.contains(op)) {
            self.advance();
            let right = operand(self)?;
            left = self.push(Node::BinOpExp {
                left,
                op: op.to_string(),
                right,
            });
        }

        Ok(left)
    }

    /// Parse boolean `or`
    fn parse_or(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_layer(&["or"], Self::parse_and)
    }

    /// Parse boolean `and`
    fn parse_and(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_layer(&["and"], Self::parse_not)
    }

    /// Parse prefix `not`; recursive so `not not x` nests.
    fn parse_not(&mut self) -> Result<NodeId, ParseError> {
        if self.match_token(&Token::Not(self.current_location())) {
            let arg = self.nested(|p| p.parse_not())?;
            return Ok(self.push(Node::UniOpExp {
                op: "not".to_string(),
                arg,
            }));
        }

        self.parse_comparison()
    }

    /// Parse comparison (==, <, >)
    fn parse_comparison(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_layer(&["==", "<", ">"], Self::parse_additive)
    }

    /// Parse additive (+, -)
    fn parse_additive(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_layer(&["+", "-"], Self::parse_multiplicative)
    }

    /// Parse multiplicative (*, /)
    fn parse_multiplicative(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_layer(&["*", "/"], Self::parse_index)
    }

    /// Parse indexing: atom followed by any number of `[exp]`
    fn parse_index(&mut self) -> Result<NodeId, ParseError> {
        let mut indexable = self.parse_atom()?;

        while self.match_token(&Token::LBracket(self.current_location())) {
            let index = self.parse_expression()?;
            self.expect_token(
                &Token::RBracket(self.current_location()),
                "']' after index expression",
            )?;
            indexable = self.push(Node::Index { indexable, index });
        }

        Ok(indexable)
    }

    /// Parse atom: parenthesized expression, literal, array literal or variable
    fn parse_atom(&mut self) -> Result<NodeId, ParseError> {
        let node = match self.peek().clone() {
            Token::LParen(_) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_rparen("after parenthesized expression")?;
                return Ok(inner);
            }
            Token::LBracket(_) => {
                self.advance();
                let elements = self.parse_expression_list(
                    &Token::RBracket(self.current_location()),
                    "in array literal",
                )?;
                Node::Array { elements }
            }
            Token::IntLiteral(value, _) => {
                self.advance();
                Node::Int { value }
            }
            Token::StringLiteral(value, _) => {
                self.advance();
                Node::String { value }
            }
            Token::Ident(name, _) => {
                self.advance();
                Node::Var { name }
            }
            _ => return Err(self.error("expression")),
        };

        Ok(self.push(node))
    }
}
