//! Fact records and their textual rendering
//!
//! A rendered fact set is one fact per line:
//!
//! ```text
//! 'Print'('1','2').
//! 'Int'('2','7').
//! ```
//!
//! Arguments are always single-quoted and written verbatim. Relation names are
//! quoted too by default, which keeps capitalised names atoms when the file is
//! consulted by a Prolog system. Note that this default is not the bare
//! `RelationName('arg1',..).` form: both [`RenderOptions::default`] and the
//! [`Display`](fmt::Display) impl of [`FactSet`] produce `'Var'('1','x').`.
//! Set [`RenderOptions::quote_relations`] to `false` for `Var('1','x').`.

use crate::parser::ast::NodeKind;
use std::fmt;
use std::io;

/// Relation name of a fact: one per node kind plus the two list relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Node(NodeKind),
    Empty,
    Elem,
}

impl Relation {
    pub fn name(self) -> &'static str {
        match self {
            Relation::Node(kind) => kind.name(),
            Relation::Empty => "Empty",
            Relation::Elem => "Elem",
        }
    }

    /// Number of arguments every fact of this relation carries.
    pub fn arity(self) -> usize {
        match self {
            Relation::Node(kind) => 1 + kind.field_names().len(),
            Relation::Empty => 1,
            Relation::Elem => 3,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ground fact: relation name and ordered string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub relation: Relation,
    pub args: Vec<String>,
}

impl Fact {
    pub fn new(relation: Relation, args: Vec<String>) -> Self {
        debug_assert_eq!(args.len(), relation.arity(), "{} arity", relation);
        Self { relation, args }
    }

    /// First argument: the identifier of the node or list cell the fact describes.
    pub fn subject(&self) -> &str {
        &self.args[0]
    }

    pub fn render(&self, options: RenderOptions) -> String {
        let mut out = String::new();
        if options.quote_relations {
            out.push('\'');
            out.push_str(self.relation.name());
            out.push('\'');
        } else {
            out.push_str(self.relation.name());
        }
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('\'');
            out.push_str(arg);
            out.push('\'');
        }
        out.push_str(").");
        out
    }
}

/// How facts are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write `'Var'(..)` rather than `Var(..)`. Defaults to `true`.
    pub quote_relations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            quote_relations: true,
        }
    }
}

/// Ordered facts produced by one export. Only the exporter appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    facts: Vec<Fact>,
}

impl FactSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, fact: Fact) {
        self.facts.push(fact);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// Facts of one relation, in emission order.
    pub fn with_relation(&self, relation: Relation) -> impl Iterator<Item = &Fact> + '_ {
        self.facts.iter().filter(move |f| f.relation == relation)
    }

    /// The whole set as text, one newline-terminated fact per line.
    pub fn render(&self, options: RenderOptions) -> String {
        let mut out = String::new();
        for fact in &self.facts {
            out.push_str(&fact.render(options));
            out.push('\n');
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, writer: &mut W, options: RenderOptions) -> io::Result<()> {
        for fact in &self.facts {
            writeln!(writer, "{}", fact.render(options))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

impl fmt::Display for FactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}
