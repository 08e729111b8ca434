//! MustScript source code parser
//!
//! This module transforms MustScript source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), error type and entry point
//! - [`ast`]: AST node definitions and the node arena
//!
//! # Language
//!
//! A program is a single statement, usually a block. Statements are `print`,
//! assignment, blocks, `if`, `while`, procedure definitions (`def`) and call
//! statements. Expressions cover integers, strings, array literals, variables,
//! indexing, arithmetic, comparisons and the boolean `not`/`and`/`or`.
//! `#` starts a comment that runs to the end of the line.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence layer.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;

mod expressions;
mod statements;

pub use ast::{Ast, AstBuilder, FieldValue, Node, NodeId, NodeKind, SourceLocation};
pub use parse::{parse, ParseError, Parser};
