// Surrogate identifiers for exported nodes and list cells

use crate::parser::ast::NodeId;
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque identifier written into facts in place of a node or list cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sym(u64);

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out identifiers from one increasing counter.
///
/// Node identifiers are memoized per [`NodeId`]; list-cell identifiers are
/// always fresh. Both come from the same counter, so they never collide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
    nodes: FxHashMap<NodeId, Sym>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&mut self) -> Sym {
        self.next += 1;
        Sym(self.next)
    }

    /// Identifier of `node`, allocated on first request.
    pub fn node(&mut self, node: NodeId) -> Sym {
        if let Some(sym) = self.nodes.get(&node) {
            return *sym;
        }
        let sym = self.fresh();
        self.nodes.insert(node, sym);
        sym
    }

    /// A new list-cell identifier.
    pub fn cell(&mut self) -> Sym {
        self.fresh()
    }

    /// Number of identifiers handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{AstBuilder, Node};

    #[test]
    fn test_node_ids_are_stable() {
        let mut b = AstBuilder::new();
        let x = b.push(Node::Var { name: "x".into() });
        let y = b.push(Node::Var { name: "x".into() });

        let mut ids = IdAllocator::new();
        let first = ids.node(x);
        assert_eq!(ids.node(x), first);
        assert_ne!(ids.node(y), first);
        assert_eq!(ids.allocated(), 2);
    }

    #[test]
    fn test_cells_never_collide_with_nodes() {
        let mut b = AstBuilder::new();
        let x = b.push(Node::Int { value: "1".into() });

        let mut ids = IdAllocator::new();
        let c1 = ids.cell();
        let n = ids.node(x);
        let c2 = ids.cell();
        assert_ne!(c1, n);
        assert_ne!(c2, n);
        assert_ne!(c1, c2);
        assert_eq!(c1.to_string(), "1");
        assert_eq!(n.to_string(), "2");
    }
}
