//! Exhaustive parsing for arbitrary context-free grammars.
//!
//! Given a [`Grammar`] (any arity of right side, empty productions allowed)
//! and an already tokenized sentence, [`ForestParser`] enumerates *every*
//! parse tree of a symbol over a span, memoizing each `(symbol, start, end)`
//! sub-forest. Grammars with empty productions are first rewritten by
//! [`remove_epsilons`].
//!
//! ```text
//! text --notation--> Grammar --epsilon--> Grammar --forest--> [Tree] --rendering--> text
//! ```

use log::debug;
use std::rc::Rc;
use thiserror::Error;

#[cfg(test)]
#[macro_use]
mod tests;

mod display;
pub mod epsilon;
pub mod forest;
pub mod grammar;
mod node;
mod notation;
pub mod rendering;
pub mod splits;
mod util;

pub use epsilon::{nullable_nonterms, remove_epsilons, EpsilonFree};
pub use forest::{Forest, ForestParser, ParseStats};
pub use grammar::{Grammar, GrammarBuilder, Production, Symbol, EPSILON};
pub use node::Tree;
pub use rendering::Rendered;
pub use splits::{possible_splits, sub_spans, Splits};

#[derive(Debug, Error)]
pub enum ArborError {
    #[error("unknown non-terminal `{0}`")]
    UnknownNonTerm(Symbol),
    #[error("symbol `{0}` is neither a terminal nor a non-terminal of the grammar")]
    UnknownSymbol(Symbol),
    #[error("`{0}` cannot be used as a non-terminal")]
    InvalidNonTerm(Symbol),
    #[error("non-terminal `{0}` has no productions")]
    NoProductions(Symbol),
    #[error("non-terminal `{0}` has a production with no symbols")]
    EmptyRightSide(Symbol),
    #[error("empty marker `{marker}` must stand alone in a production of `{lhs}`")]
    MisplacedEmptyMarker { lhs: Symbol, marker: Symbol },
    #[error("span [{start}, {end}) is out of bounds for {len} tokens")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What [`parse_sentence`] should do with a grammar and a sentence.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    pub start: Symbol,
    /// Run [`remove_epsilons`] before parsing. Without it, empty productions
    /// are simply never matched.
    pub eliminate_epsilons: bool,
}

impl ParseOptions {
    pub fn new(start: impl Into<Symbol>) -> Self {
        ParseOptions { start: start.into(), eliminate_epsilons: true }
    }

    pub fn keep_epsilons(mut self) -> Self {
        self.eliminate_epsilons = false;
        self
    }
}

/// Splits `sentence` on whitespace and returns every tree deriving it from
/// `options.start`. An empty result means the sentence is not in the
/// language; it is not an error.
pub fn parse_sentence(grammar: &Grammar, sentence: &str, options: &ParseOptions) -> Result<Vec<Rc<Tree>>, ArborError> {
    let tokens: Vec<Symbol> = sentence.split_whitespace().map(Symbol::from).collect();
    let rewritten;
    let grammar = if options.eliminate_epsilons && grammar.has_empty_productions() {
        rewritten = remove_epsilons(grammar).grammar;
        &rewritten
    } else {
        grammar
    };
    let mut parser = ForestParser::new(grammar, tokens);
    let forest = parser.parse_all(&options.start)?;
    debug!("parsed {} tree(s) from `{}`: {:?}", forest.len(), options.start, parser.stats());
    Ok(forest.to_vec())
}

