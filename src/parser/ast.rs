// AST (Abstract Syntax Tree) definitions for MustScript

use std::fmt;

/// Handle of a node inside an [`Ast`] arena.
///
/// Handles are assigned in construction order and are the node's identity:
/// two structurally equal subtrees still have different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The closed set of node kinds. The variant name is the relation name
/// used for the node's fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Expressions
    Var,
    Int,
    String,
    Array,
    Index,
    BinOpExp,
    UniOpExp,
    // Statements
    Print,
    Assign,
    Block,
    If,
    While,
    Def,
    Call,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Var => "Var",
            NodeKind::Int => "Int",
            NodeKind::String => "String",
            NodeKind::Array => "Array",
            NodeKind::Index => "Index",
            NodeKind::BinOpExp => "BinOpExp",
            NodeKind::UniOpExp => "UniOpExp",
            NodeKind::Print => "Print",
            NodeKind::Assign => "Assign",
            NodeKind::Block => "Block",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Def => "Def",
            NodeKind::Call => "Call",
        }
    }

    /// Declared field names, in the order they appear in the node's fact.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            NodeKind::Var => &["name"],
            NodeKind::Int | NodeKind::String => &["value"],
            NodeKind::Array => &["elements"],
            NodeKind::Index => &["indexable", "index"],
            NodeKind::BinOpExp => &["left", "op", "right"],
            NodeKind::UniOpExp => &["op", "arg"],
            NodeKind::Print => &["exp"],
            NodeKind::Assign => &["left", "right"],
            NodeKind::Block => &["stmts"],
            NodeKind::If | NodeKind::While => &["exp", "stmt"],
            NodeKind::Def => &["name", "params", "body"],
            NodeKind::Call => &["name", "args"],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// AST nodes representing statements and expressions.
///
/// Children are arena handles; sequence fields are ordered handle lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    // Expressions
    Var {
        name: String,
    },
    /// Decimal digits without leading zeros.
    Int {
        value: String,
    },
    String {
        value: String,
    },
    Array {
        elements: Vec<NodeId>,
    },
    Index {
        indexable: NodeId,
        index: NodeId,
    },
    BinOpExp {
        left: NodeId,
        op: String,
        right: NodeId,
    },
    UniOpExp {
        op: String,
        arg: NodeId,
    },

    // Statements
    Print {
        exp: NodeId,
    },
    Assign {
        left: NodeId,
        right: NodeId,
    },
    Block {
        stmts: Vec<NodeId>,
    },
    If {
        exp: NodeId,
        stmt: NodeId,
    },
    While {
        exp: NodeId,
        stmt: NodeId,
    },
    Def {
        name: String,
        params: Vec<NodeId>,
        body: NodeId,
    },
    Call {
        name: String,
        args: Vec<NodeId>,
    },
}

/// One field value of a node, borrowed from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Integer digits; written without quotes in [`Ast::display`].
    Int(&'a str),
    Str(&'a str),
    Node(NodeId),
    List(&'a [NodeId]),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Var { .. } => NodeKind::Var,
            Node::Int { .. } => NodeKind::Int,
            Node::String { .. } => NodeKind::String,
            Node::Array { .. } => NodeKind::Array,
            Node::Index { .. } => NodeKind::Index,
            Node::BinOpExp { .. } => NodeKind::BinOpExp,
            Node::UniOpExp { .. } => NodeKind::UniOpExp,
            Node::Print { .. } => NodeKind::Print,
            Node::Assign { .. } => NodeKind::Assign,
            Node::Block { .. } => NodeKind::Block,
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::Def { .. } => NodeKind::Def,
            Node::Call { .. } => NodeKind::Call,
        }
    }

    /// Field values in declaration order; always as many as
    /// `self.kind().field_names()`.
    pub fn fields(&self) -> Vec<FieldValue<'_>> {
        use FieldValue as F;
        match self {
            Node::Var { name } => vec![F::Str(name)],
            Node::Int { value } => vec![F::Int(value)],
            Node::String { value } => vec![F::Str(value)],
            Node::Array { elements } => vec![F::List(elements)],
            Node::Index { indexable, index } => vec![F::Node(*indexable), F::Node(*index)],
            Node::BinOpExp { left, op, right } => {
                vec![F::Node(*left), F::Str(op), F::Node(*right)]
            }
            Node::UniOpExp { op, arg } => vec![F::Str(op), F::Node(*arg)],
            Node::Print { exp } => vec![F::Node(*exp)],
            Node::Assign { left, right } => vec![F::Node(*left), F::Node(*right)],
            Node::Block { stmts } => vec![F::List(stmts)],
            Node::If { exp, stmt } | Node::While { exp, stmt } => {
                vec![F::Node(*exp), F::Node(*stmt)]
            }
            Node::Def { name, params, body } => {
                vec![F::Str(name), F::List(params), F::Node(*body)]
            }
            Node::Call { name, args } => vec![F::Str(name), F::List(args)],
        }
    }
}

/// Arena-backed syntax tree with a single root statement.
///
/// Only shared access is exposed; once built the tree cannot change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Ast {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Panics if `id` was not produced by the builder of this tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn root_node(&self) -> &Node {
        self.get(self.root)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Renders the subtree at `id` as a nested constructor term, e.g.
    /// `BinOpExp(Int(1),'+',Var('x'))`.
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { ast: self, id }
    }
}

/// Appends nodes and hands out their handles.
#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<Node>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self, root: NodeId) -> Ast {
        debug_assert!(root.0 < self.nodes.len(), "root handle out of range");
        Ast {
            nodes: self.nodes,
            root,
        }
    }
}

pub struct NodeDisplay<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.ast.get(self.id);
        write!(f, "{}(", node.kind())?;
        for (i, field) in node.fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match field {
                FieldValue::Int(n) => write!(f, "{}", n)?,
                FieldValue::Str(s) => write!(f, "'{}'", s)?,
                FieldValue::Node(child) => write!(f, "{}", self.ast.display(child))?,
                FieldValue::List(items) => {
                    f.write_str("[")?;
                    for (j, item) in items.iter().enumerate() {
                        if j > 0 {
                            f.write_str(",")?;
                        }
                        write!(f, "{}", self.ast.display(*item))?;
                    }
                    f.write_str("]")?;
                }
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts_match_names() {
        let mut b = AstBuilder::new();
        let x = b.push(Node::Var { name: "x".into() });
        let one = b.push(Node::Int { value: "1".into() });
        let nodes = vec![
            Node::Var { name: "x".into() },
            Node::Int { value: "1".into() },
            Node::String { value: "s".into() },
            Node::Array { elements: vec![x] },
            Node::Index { indexable: x, index: one },
            Node::BinOpExp { left: x, op: "+".into(), right: one },
            Node::UniOpExp { op: "not".into(), arg: x },
            Node::Print { exp: x },
            Node::Assign { left: x, right: one },
            Node::Block { stmts: vec![] },
            Node::If { exp: x, stmt: one },
            Node::While { exp: x, stmt: one },
            Node::Def { name: "f".into(), params: vec![x], body: one },
            Node::Call { name: "f".into(), args: vec![] },
        ];

        for node in &nodes {
            assert_eq!(node.fields().len(), node.kind().field_names().len(), "{}", node.kind());
        }
        let names: Vec<&str> = nodes.iter().map(|n| n.kind().name()).collect();
        assert_eq!(
            names,
            [
                "Var", "Int", "String", "Array", "Index", "BinOpExp", "UniOpExp", "Print",
                "Assign", "Block", "If", "While", "Def", "Call"
            ]
        );
    }

    #[test]
    fn test_equal_nodes_get_distinct_handles() {
        let mut b = AstBuilder::new();
        let a = b.push(Node::Int { value: "7".into() });
        let c = b.push(Node::Int { value: "7".into() });
        assert_ne!(a, c);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_display() {
        let mut b = AstBuilder::new();
        let a = b.push(Node::Var { name: "a".into() });
        let zero = b.push(Node::Int { value: "0".into() });
        let idx = b.push(Node::Index { indexable: a, index: zero });
        let arr = b.push(Node::Array { elements: vec![idx, zero] });
        let ast = b.finish(arr);

        assert_eq!(
            ast.display(ast.root()).to_string(),
            "Array([Index(Var('a'),Int(0)),Int(0)])"
        );
    }
}
