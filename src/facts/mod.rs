//! Fact export
//!
//! Turns a parsed [`Ast`](crate::parser::Ast) into ground facts for a
//! logic-based analysis engine:
//! - [`ids`]: surrogate identifiers for nodes and list cells
//! - [`fact`]: fact records, the ordered [`FactSet`] and its textual form
//! - [`export`]: the tree walk and the cons-list encoding of sequences

pub mod export;
pub mod fact;
pub mod ids;

pub use export::{export, Exporter};
pub use fact::{Fact, FactSet, Relation, RenderOptions};
pub use ids::{IdAllocator, Sym};
