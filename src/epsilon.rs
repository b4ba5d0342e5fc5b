//! A grammar transform that removes empty productions.
//!
//! Every production is replaced by the set of productions obtained by keeping
//! or dropping each nullable symbol in it. Productions that end up with no
//! symbols are left out, so afterwards every non-terminal consumes at least
//! one token. For
//!
//! ```text
//! S -> A b A
//! A -> a | ε
//! ```
//!
//! the result is
//!
//! ```text
//! S -> b | b A | A b | A b A
//! A -> a
//! ```
//!
//! Note that a nullable start symbol loses its empty derivation: the rewritten
//! grammar never derives the empty sentence.

use crate::grammar::{Grammar, Production, Symbol};

use linear_map::LinearMap;
use log::debug;
use std::collections::HashSet;

/// The outcome of [`remove_epsilons`].
#[derive(Clone, Debug)]
pub struct EpsilonFree {
    /// Same non-terminals as the input, with no empty productions.
    pub grammar: Grammar,
    /// Non-terminals of the input that can derive the empty string.
    pub nullable: HashSet<Symbol>,
    /// Productions of the rewritten grammar that mention a nullable symbol,
    /// with the nullable symbols stripped out. Duplicates and productions
    /// left empty are not listed.
    pub derived: Vec<(Symbol, Production)>,
}

/// The non-terminals that derive the empty string: those with an empty-marker
/// production, and then any with a production made only of nullable symbols,
/// until nothing changes.
pub fn nullable_nonterms(grammar: &Grammar) -> HashSet<Symbol> {
    let marker = grammar.empty_marker();
    let mut nullable: HashSet<Symbol> = grammar.rules()
        .filter(|(_, prods)| prods.iter().any(|p| p.is_empty_marker(marker)))
        .map(|(lhs, _)| lhs.clone())
        .collect();
    loop {
        let grown: Vec<Symbol> = grammar.rules()
            .filter(|(lhs, _)| !nullable.contains(*lhs))
            .filter(|(_, prods)| prods.iter().any(|p| p.iter().all(|s| nullable.contains(s))))
            .map(|(lhs, _)| lhs.clone())
            .collect();
        if grown.is_empty() {
            return nullable;
        }
        nullable.extend(grown);
    }
}

/// Every way of keeping or dropping the nullable symbols of `rhs`.
///
/// Working from the last symbol back: a nullable symbol contributes the
/// expansions of the rest without it, followed by the same expansions with it
/// in front. So for `A b A` with `A` nullable the order is `b`, `b A`,
/// `A b`, `A b A`.
fn expansions(rhs: &[Symbol], nullable: &HashSet<Symbol>) -> Vec<Vec<Symbol>> {
    let mut rest: Vec<Vec<Symbol>> = vec![vec![]];
    for head in rhs.iter().rev() {
        let with_head = rest.iter().map(|tail| {
            std::iter::once(head.clone()).chain(tail.iter().cloned()).collect::<Vec<_>>()
        });
        rest = if nullable.contains(head) {
            rest.iter().cloned().chain(with_head).collect()
        } else {
            with_head.collect()
        };
    }
    rest
}

pub fn remove_epsilons(grammar: &Grammar) -> EpsilonFree {
    let marker = grammar.empty_marker();
    let nullable = nullable_nonterms(grammar);
    debug!("nullable non-terminals: {:?}", nullable);

    let mut rules: LinearMap<Symbol, Vec<Production>> = LinearMap::new();
    for (lhs, prods) in grammar.rules() {
        let rewritten = prods.iter()
            .filter(|rhs| !rhs.is_empty_marker(marker))
            .flat_map(|rhs| expansions(rhs, &nullable))
            .filter(|rhs| !rhs.is_empty())
            .map(Production::from)
            .collect();
        rules.insert(lhs.clone(), rewritten);
    }

    let mut derived: Vec<(Symbol, Production)> = Vec::new();
    for (lhs, prods) in rules.iter() {
        for rhs in prods.iter().filter(|rhs| rhs.iter().any(|s| nullable.contains(s))) {
            let stripped: Production = rhs.iter().filter(|s| !nullable.contains(*s)).collect();
            let entry = (lhs.clone(), stripped);
            if !entry.1.is_empty() && !derived.contains(&entry) {
                derived.push(entry);
            }
        }
    }

    let grammar = Grammar::from_rules(rules, marker.clone());
    debug!("epsilon-free grammar:\n{}", grammar);
    EpsilonFree { grammar, nullable, derived }
}

#[cfg(test)]
#[path = "tests/epsilon.rs"]
mod tests_for_epsilon;
