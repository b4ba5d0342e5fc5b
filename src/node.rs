use crate::grammar::Symbol;

use std::rc::Rc;

/// A parse tree.
///
/// Children are held through `Rc`: the forest parser hands the same sub-tree
/// to every parent that can use it, and nothing mutates a tree once built.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Tree {
    /// A matched token.
    Leaf(Symbol),
    /// A non-terminal and the trees of its right side, in order.
    Internal(Symbol, Vec<Rc<Tree>>),
}

impl Tree {
    pub fn leaf(value: impl Into<Symbol>) -> Rc<Tree> {
        Rc::new(Tree::Leaf(value.into()))
    }

    pub fn internal(label: impl Into<Symbol>, children: Vec<Rc<Tree>>) -> Rc<Tree> {
        Rc::new(Tree::Internal(label.into(), children))
    }

    /// The leaf value or the internal label.
    pub fn label(&self) -> &Symbol {
        match self {
            Tree::Leaf(value) => value,
            Tree::Internal(label, _) => label,
        }
    }

    pub fn children(&self) -> &[Rc<Tree>] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Internal(_, children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// The tokens under this tree, left to right.
    pub fn yield_tokens(&self) -> Vec<&Symbol> {
        let mut accum = Vec::new();
        let mut pending: Vec<&Tree> = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Tree::Leaf(value) => accum.push(value),
                Tree::Internal(_, children) => pending.extend(children.iter().rev().map(|c| &**c)),
            }
        }
        accum
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}
