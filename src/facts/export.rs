//! AST → fact linearisation
//!
//! Pre-order walk: a node's own fact comes first, then its children in field
//! order. A node of kind `K` with fields `f1..fk` yields `K(id, v1, .., vk)`
//! where primitive fields are written literally, node fields as the child's
//! identifier and sequence fields as the identifier of a fresh list head.
//!
//! Sequences become cons lists over facts. At head `h`, an empty sequence is
//! `Empty(h)`; otherwise a tail cell `h'` is allocated, `Elem(h, id(x), h')` is
//! emitted, the element `x` is exported, and the rest continues at `h'`.
//!
//! The walk uses an explicit task stack instead of recursion so that deeply
//! nested programs cannot exhaust the call stack. Tasks are pushed in reverse
//! so the pop order is exactly the recursive pre-order.

use super::fact::{Fact, FactSet, Relation};
use super::ids::{IdAllocator, Sym};
use crate::parser::ast::{Ast, FieldValue, NodeId};
use tracing::{debug, trace};

/// Exports `ast` with a fresh identifier allocator.
pub fn export(ast: &Ast) -> FactSet {
    Exporter::new(ast).run()
}

enum Task<'a> {
    Node(NodeId),
    List { head: Sym, items: &'a [NodeId] },
}

/// One export run: the tree being read, its identifiers and the facts so far.
pub struct Exporter<'a> {
    ast: &'a Ast,
    ids: IdAllocator,
    facts: FactSet,
    stack: Vec<Task<'a>>,
}

impl<'a> Exporter<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            ids: IdAllocator::new(),
            facts: FactSet::new(),
            stack: Vec::new(),
        }
    }

    pub fn run(mut self) -> FactSet {
        self.stack.push(Task::Node(self.ast.root()));

        while let Some(task) = self.stack.pop() {
            match task {
                Task::Node(id) => self.export_node(id),
                Task::List { head, items } => self.export_list(head, items),
            }
        }

        debug!(
            facts = self.facts.len(),
            identifiers = self.ids.allocated(),
            "exported ast facts"
        );
        self.facts
    }

    fn emit(&mut self, relation: Relation, args: Vec<String>) {
        let fact = Fact::new(relation, args);
        trace!(fact = %fact.render(Default::default()), "emit");
        self.facts.push(fact);
    }

    fn export_node(&mut self, id: NodeId) {
        let ast = self.ast;
        let node = ast.get(id);

        let mut args = vec![self.ids.node(id).to_string()];
        let mut children = Vec::new();

        for field in node.fields() {
            match field {
                FieldValue::Int(value) => args.push(value.to_string()),
                FieldValue::Str(value) => args.push(value.to_string()),
                FieldValue::Node(child) => {
                    args.push(self.ids.node(child).to_string());
                    children.push(Task::Node(child));
                }
                FieldValue::List(items) => {
                    let head = self.ids.cell();
                    args.push(head.to_string());
                    children.push(Task::List { head, items });
                }
            }
        }

        self.emit(Relation::Node(node.kind()), args);
        self.stack.extend(children.into_iter().rev());
    }

    fn export_list(&mut self, head: Sym, items: &'a [NodeId]) {
        match items.split_first() {
            None => self.emit(Relation::Empty, vec![head.to_string()]),
            Some((&first, rest)) => {
                let element = self.ids.node(first);
                let tail = self.ids.cell();
                self.emit(
                    Relation::Elem,
                    vec![head.to_string(), element.to_string(), tail.to_string()],
                );
                self.stack.push(Task::List { head: tail, items: rest });
                self.stack.push(Task::Node(first));
            }
        }
    }
}
