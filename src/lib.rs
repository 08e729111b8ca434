//! # Introduction
//!
//! mustfacts parses MustScript programs and exports their abstract syntax
//! trees as ground Prolog facts, ready to be consulted by a logic-based
//! analysis engine.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Ast → Exporter → FactSet → facts.P
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an arena-backed AST.
//! 2. [`facts`] — walks the AST in pre-order and emits one fact per node and
//!    one `Elem`/`Empty` fact per list position.
//!
//! ## Example
//!
//! ```
//! let ast = mustfacts::parse("print [1];").unwrap();
//! let facts = mustfacts::export(&ast);
//! assert_eq!(facts.get(0).unwrap().relation.name(), "Print");
//! assert_eq!(facts.len(), 5);
//! ```

pub mod constants;
pub mod facts;
pub mod parser;

pub use facts::{export, FactSet, RenderOptions};
pub use parser::{parse, Ast, ParseError};
