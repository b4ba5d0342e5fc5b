//! Memoized, exhaustive top-down parsing.
//!
//! The set of trees for `(A, i, j)` is built from the trees of smaller (or
//! unit-chained) keys: for each right side of `A`, each way of cutting
//! `[i, j)` among its symbols (see [`crate::splits`]), and each combination
//! of the sub-forests found for the pieces. Every key is computed at most
//! once and kept for the lifetime of the parser, so a sub-forest requested by
//! many overlapping splits is shared rather than rebuilt.
//!
//! A cycle of unit productions (`A -> B`, `B -> A`) is cut where a key is
//! requested while it is still being computed: that request yields no trees,
//! and a memoized forest loses the trees whose unit chain runs through such a
//! key. So no key repeats along a unit chain. A forest is memoized only if
//! every cut beneath it went through its own key; one cut through a key
//! further up the stack depends on that context and is thrown away once the
//! enclosing key finishes.
//!
//! The grammar should have no empty productions (see [`crate::epsilon`]); any
//! that remain are never matched, since no symbol derives an empty span here.

use crate::grammar::{Grammar, Symbol};
use crate::node::Tree;
use crate::splits::{sub_spans, Splits};
use crate::util::Cross;
use crate::ArborError;

use log::trace;
use std::collections::HashMap;
use std::rc::Rc;

/// All the trees rooted at one symbol over one span.
pub type Forest = Rc<[Rc<Tree>]>;

type MemoKey = (Symbol, usize, usize);

/// Counters describing the work a [`ForestParser`] has done so far.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ParseStats {
    /// Distinct `(symbol, start, end)` keys in the memo table.
    pub memo_entries: usize,
    /// Keys whose forest was actually computed. Equal to `memo_entries`
    /// unless a cycle was cut, since a forest cut through an enclosing key is
    /// recomputed on each request.
    pub computations: usize,
    /// Requests answered from the memo table.
    pub memo_hits: usize,
    /// Requests cut short because the key was already being computed
    /// (a cycle of unit productions).
    pub cycles_cut: usize,
}

/// A key being computed.
struct Frame {
    key: MemoKey,
    /// Shallowest stack depth any cut beneath this frame went through.
    low: usize,
}

pub struct ForestParser<'g> {
    grammar: &'g Grammar,
    tokens: Vec<Symbol>,
    memo: HashMap<MemoKey, Forest>,
    stack: Vec<Frame>,
    stats: ParseStats,
}

impl<'g> ForestParser<'g> {
    pub fn new<T: Into<Symbol>>(grammar: &'g Grammar, tokens: impl IntoIterator<Item = T>) -> Self {
        ForestParser {
            grammar,
            tokens: tokens.into_iter().map(Into::into).collect(),
            memo: HashMap::new(),
            stack: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }

    pub fn tokens(&self) -> &[Symbol] { &self.tokens }

    pub fn stats(&self) -> ParseStats {
        ParseStats { memo_entries: self.memo.len(), ..self.stats }
    }

    /// Every tree deriving `tokens[start..end]` from `symbol`.
    ///
    /// `symbol` must be a terminal or a non-terminal of the grammar, and the
    /// span must lie within the tokens. A span with `start >= end` is valid
    /// and has no trees.
    pub fn parse(&mut self, symbol: &Symbol, start: usize, end: usize) -> Result<Forest, ArborError> {
        if !self.grammar.is_nonterminal(symbol) && !self.grammar.is_terminal(symbol) {
            return Err(ArborError::UnknownSymbol(symbol.clone()));
        }
        if start > self.tokens.len() || end > self.tokens.len() {
            return Err(ArborError::SpanOutOfBounds { start, end, len: self.tokens.len() });
        }
        Ok(self.forest(symbol, start, end))
    }

    /// Every tree deriving the whole token sequence from `symbol`.
    pub fn parse_all(&mut self, symbol: &Symbol) -> Result<Forest, ArborError> {
        let end = self.tokens.len();
        self.parse(symbol, 0, end)
    }

    fn forest(&mut self, symbol: &Symbol, i: usize, j: usize) -> Forest {
        let key = (symbol.clone(), i, j);
        if let Some(forest) = self.memo.get(&key) {
            self.stats.memo_hits += 1;
            let forest = forest.clone();
            return self.exclude_enclosing(forest, i, j);
        }
        if let Some(depth) = self.enclosing_depth(symbol, i, j) {
            trace!("cycle through {} over [{}, {}) cut", symbol, i, j);
            self.stats.cycles_cut += 1;
            self.note_cut(depth);
            return Rc::from(Vec::new());
        }
        let depth = self.stack.len();
        self.stack.push(Frame { key, low: depth });
        self.stats.computations += 1;
        let trees = self.derive(symbol, i, j);
        let forest: Forest = trees.into();
        let Some(Frame { key, low }) = self.stack.pop() else {
            return forest;
        };
        if low >= depth {
            trace!("{} over [{}, {}): {} tree(s)", symbol, i, j, forest.len());
            self.memo.insert(key, forest.clone());
        } else {
            trace!("{} over [{}, {}): {} tree(s), not memoized", symbol, i, j, forest.len());
            self.note_cut(low);
        }
        forest
    }

    /// Stack depth of the frame computing `(symbol, i, j)`, if any.
    ///
    /// Only a unit production keeps the span of its parent, so frames with
    /// the span `[i, j)` sit together at the top of the stack.
    fn enclosing_depth(&self, symbol: &Symbol, i: usize, j: usize) -> Option<usize> {
        self.stack.iter()
            .enumerate()
            .rev()
            .take_while(|(_, frame)| frame.key.1 == i && frame.key.2 == j)
            .find(|(_, frame)| frame.key.0 == *symbol)
            .map(|(depth, _)| depth)
    }

    /// The current frame's forest now depends on the frame at `depth`.
    fn note_cut(&mut self, depth: usize) {
        if let Some(top) = self.stack.last_mut() {
            top.low = top.low.min(depth);
        }
    }

    /// Drops the memoized trees whose unit chain passes through a key still
    /// being computed over the same span; those would repeat that key.
    fn exclude_enclosing(&mut self, forest: Forest, i: usize, j: usize) -> Forest {
        match self.stack.last() {
            Some(top) if top.key.1 == i && top.key.2 == j => {}
            _ => return forest,
        }
        let mut low = usize::MAX;
        let kept: Vec<Rc<Tree>> = forest.iter()
            .filter(|tree| {
                match unit_spine(tree).filter_map(|label| self.enclosing_depth(label, i, j)).min() {
                    Some(depth) => {
                        low = low.min(depth);
                        false
                    }
                    None => true,
                }
            })
            .cloned()
            .collect();
        if low == usize::MAX {
            return forest;
        }
        self.note_cut(low);
        kept.into()
    }

    /// A leaf for `terminal` if it is exactly the token at `[i, j)`.
    fn scan(&self, terminal: &Symbol, i: usize, j: usize) -> Option<Rc<Tree>> {
        if j == i + 1 && self.tokens.get(i) == Some(terminal) {
            Some(Tree::leaf(terminal))
        } else {
            None
        }
    }

    fn derive(&mut self, symbol: &Symbol, i: usize, j: usize) -> Vec<Rc<Tree>> {
        if i >= j {
            return Vec::new();
        }
        let grammar = self.grammar;
        if grammar.is_terminal(symbol) {
            return self.scan(symbol, i, j).into_iter().collect();
        }
        let productions = match grammar.productions(symbol) {
            Ok(productions) => productions,
            Err(_) => return Vec::new(),
        };

        let mut trees = Vec::new();
        for production in productions {
            if production.is_empty_marker(grammar.empty_marker()) {
                continue;
            }
            match &production[..] {
                [s] if grammar.is_terminal(s) => {
                    if let Some(leaf) = self.scan(s, i, j) {
                        trees.push(Tree::internal(symbol, vec![leaf]));
                    }
                }
                [s] => {
                    for sub_tree in self.forest(s, i, j).iter() {
                        trees.push(Tree::internal(symbol, vec![sub_tree.clone()]));
                    }
                }
                rhs => self.derive_sequence(symbol, rhs, i, j, &mut trees),
            }
        }
        trees
    }

    /// Trees of `symbol -> rhs` over `[i, j)`, for a right side of two or
    /// more symbols.
    fn derive_sequence(&mut self, symbol: &Symbol, rhs: &[Symbol], i: usize, j: usize, trees: &mut Vec<Rc<Tree>>) {
        'splits: for cuts in Splits::new(i, j, rhs.len()) {
            let mut pieces: Vec<Forest> = Vec::with_capacity(rhs.len());
            for (s, (start, end)) in rhs.iter().zip(sub_spans(i, &cuts, j)) {
                let forest = self.forest(s, start, end);
                if forest.is_empty() {
                    continue 'splits;
                }
                pieces.push(forest);
            }
            let pools = pieces.iter().map(|forest| &forest[..]).collect();
            for children in Cross::new(pools) {
                trees.push(Tree::internal(symbol, children));
            }
        }
    }
}

/// The labels from `tree` down its chain of unit productions, all of which
/// share the root's span.
fn unit_spine(tree: &Tree) -> impl Iterator<Item = &Symbol> {
    std::iter::successors(Some(tree), |&node| match node.children() {
        [only] if !only.is_leaf() => Some(&**only),
        _ => None,
    })
    .map(Tree::label)
}

#[cfg(test)]
#[path = "tests/forest.rs"]
mod tests_for_forest;
