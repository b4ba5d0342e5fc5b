use crate::ArborError;

use derive_more::{Deref, Display, From};
use linear_map::LinearMap;
use std::collections::HashSet;
use std::rc::Rc;

// A grammar G is a tuple (Sigma, Delta, R), where
//   Sigma is a finite set of terminals
//   Delta is a finite set of non-terminals (the keys of R)
//   R maps non-terminals to ordered lists of right sides
//
// Sigma is never written down: it is every right-side symbol that is not in
// Delta (and is not the empty-string marker).

/// The marker used, on its own, as the right side of an empty production.
pub const EPSILON: &str = "ε";

/// An opaque grammar symbol. Whether it is a terminal or a non-terminal is a
/// property of the [`Grammar`] it is looked up in, not of the symbol.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.into()) } }
impl From<String> for Symbol { fn from(s: String) -> Self { Symbol(s.into()) } }
impl From<&String> for Symbol { fn from(s: &String) -> Self { Symbol(s.as_str().into()) } }
impl From<&Symbol> for Symbol { fn from(s: &Symbol) -> Self { s.clone() } }

/// One right side of a rule.
#[derive(PartialEq, Eq, Clone, Hash, Debug, Deref, From)]
pub struct Production(Vec<Symbol>);

impl Production {
    pub fn symbols(&self) -> &[Symbol] { &self.0 }

    /// True when this right side is exactly the empty-string `marker`.
    pub fn is_empty_marker(&self, marker: &Symbol) -> bool {
        matches!(&self.0[..], [s] if s == marker)
    }
}

impl<S: Into<Symbol>> FromIterator<S> for Production {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Production(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grammar {
    rules: LinearMap<Symbol, Vec<Production>>,
    nonterms: HashSet<Symbol>,
    terms: HashSet<Symbol>,
    empty_marker: Symbol,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder { GrammarBuilder::default() }

    /// Assembles a grammar from already-checked parts, deriving the symbol
    /// sets. Non-terminals are allowed to have no productions here; they just
    /// never derive anything.
    pub(crate) fn from_rules(rules: LinearMap<Symbol, Vec<Production>>, empty_marker: Symbol) -> Grammar {
        let nonterms: HashSet<Symbol> = rules.keys().cloned().collect();
        let terms = rules.values()
            .flat_map(|prods| prods.iter().flat_map(|p| p.iter()))
            .filter(|s| !nonterms.contains(*s) && **s != empty_marker)
            .cloned()
            .collect();
        Grammar { rules, nonterms, terms, empty_marker }
    }

    /// The productions of `nonterm`, in the order they were declared.
    ///
    /// Fails with [`ArborError::UnknownNonTerm`] when `nonterm` is not a key
    /// of this grammar (in particular for every terminal).
    pub fn productions(&self, nonterm: &Symbol) -> Result<&[Production], ArborError> {
        self.rules.get(nonterm)
            .map(|prods| &prods[..])
            .ok_or_else(|| ArborError::UnknownNonTerm(nonterm.clone()))
    }

    pub fn rules(&self) -> impl Iterator<Item = (&Symbol, &[Production])> {
        self.rules.iter().map(|(lhs, prods)| (lhs, &prods[..]))
    }

    pub fn nonterms(&self) -> &HashSet<Symbol> { &self.nonterms }

    pub fn terms(&self) -> &HashSet<Symbol> { &self.terms }

    pub fn is_nonterminal(&self, symbol: &Symbol) -> bool { self.nonterms.contains(symbol) }

    pub fn is_terminal(&self, symbol: &Symbol) -> bool { self.terms.contains(symbol) }

    pub fn empty_marker(&self) -> &Symbol { &self.empty_marker }

    /// True when some production is exactly the empty marker.
    pub fn has_empty_productions(&self) -> bool {
        self.rules.values().flatten().any(|p| p.is_empty_marker(&self.empty_marker))
    }
}

/// Builds a [`Grammar`], checking it for well-formedness once all the rules
/// are in.
#[derive(Debug)]
pub struct GrammarBuilder {
    rules: LinearMap<Symbol, Vec<Production>>,
    empty_marker: Symbol,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        GrammarBuilder { rules: LinearMap::new(), empty_marker: EPSILON.into() }
    }
}

impl GrammarBuilder {
    /// Use `marker` instead of [`EPSILON`] to spell the empty string.
    pub fn empty_marker(mut self, marker: impl Into<Symbol>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    /// Declares `lhs` as a non-terminal without adding a production to it.
    pub fn nonterm(mut self, lhs: impl Into<Symbol>) -> Self {
        self.add_nonterm(lhs.into());
        self
    }

    /// Appends the alternative `lhs -> rhs`.
    pub fn rule<S: Into<Symbol> + Clone>(mut self, lhs: impl Into<Symbol>, rhs: &[S]) -> Self {
        self.add_rule(lhs.into(), rhs.iter().cloned().collect());
        self
    }

    // Non-chaining versions, for filling a builder from a loop.

    pub fn add_nonterm(&mut self, lhs: Symbol) {
        if !self.rules.contains_key(&lhs) {
            self.rules.insert(lhs, Vec::new());
        }
    }

    pub fn add_rule(&mut self, lhs: Symbol, rhs: Production) {
        self.add_nonterm(lhs.clone());
        if let Some(prods) = self.rules.get_mut(&lhs) {
            prods.push(rhs);
        }
    }

    pub fn build(self) -> Result<Grammar, ArborError> {
        let GrammarBuilder { rules, empty_marker } = self;
        for (lhs, prods) in rules.iter() {
            if lhs == &empty_marker || lhs.as_str().is_empty() {
                return Err(ArborError::InvalidNonTerm(lhs.clone()));
            }
            if prods.is_empty() {
                return Err(ArborError::NoProductions(lhs.clone()));
            }
            for rhs in prods {
                if rhs.is_empty() {
                    return Err(ArborError::EmptyRightSide(lhs.clone()));
                }
                if rhs.len() > 1 && rhs.contains(&empty_marker) {
                    return Err(ArborError::MisplacedEmptyMarker {
                        lhs: lhs.clone(),
                        marker: empty_marker.clone(),
                    });
                }
                if let Some(s) = rhs.iter().find(|s| s.as_str().is_empty()) {
                    return Err(ArborError::UnknownSymbol(s.clone()));
                }
            }
        }
        Ok(Grammar::from_rules(rules, empty_marker))
    }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
