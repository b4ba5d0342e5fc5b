// This is actually defined at `crate::epsilon::tests_for_epsilon`

use crate::epsilon::*;
use crate::forest::ForestParser;
use crate::grammar::{Grammar, Production, Symbol};
use crate::tests::{english, grammar, parses, tokens};

use expect_test::expect;
use std::collections::HashSet;

fn set(symbols: &[&str]) -> HashSet<Symbol> {
    symbols.iter().map(|s| Symbol::from(*s)).collect()
}

fn production(lhs: &str, rhs: &str) -> (Symbol, Production) {
    (lhs.into(), rhs.split_whitespace().collect())
}

#[test]
fn directly_nullable() {
    let g = grammar("S -> A b A\nA -> a | ε");
    assert_eq!(nullable_nonterms(&g), set(&["A"]));
}

#[test]
fn nullable_through_other_nullables() {
    let g = grammar("
        S -> A B | c
        A -> a | ε
        B -> A A
        C -> A c
    ");
    assert_eq!(nullable_nonterms(&g), set(&["A", "B", "S"]));
    assert!(nullable_nonterms(&english()).is_empty());
}

#[test]
fn expansion_order() {
    let g = grammar("S -> A b A\nA -> a | ε");
    let EpsilonFree { grammar: g2, nullable, derived } = remove_epsilons(&g);
    assert_eq!(nullable, set(&["A"]));
    expect![[r#"
        S -> b | b A | A b | A b A
        A -> a
    "#]].assert_eq(&g2.to_string());
    assert_eq!(derived, vec![production("S", "b")]);
}

#[test]
fn grammar_without_epsilons_is_unchanged() {
    let g = english();
    let eps = remove_epsilons(&g);
    assert_eq!(eps.grammar, g);
    assert!(eps.nullable.is_empty());
    assert!(eps.derived.is_empty());
}

#[test]
fn epsilon_only_nonterm_stays_a_nonterm() {
    let g = grammar("S -> x E | y\nE -> ε");
    let eps = remove_epsilons(&g);
    assert!(eps.grammar.is_nonterminal(&"E".into()));
    assert!(eps.grammar.productions(&"E".into()).unwrap().is_empty());
    assert!(!eps.grammar.is_terminal(&"E".into()));
    expect![[r#"
        S -> x | x E | y
        E ->
    "#]].assert_eq(&eps.grammar.to_string());
    assert_eq!(parses(&eps.grammar, "S", "x"), vec!["S(x)"]);
}

#[test]
fn derived_productions_are_deduplicated() {
    let g = grammar("
        S -> A x B | B x A
        A -> a | ε
        B -> b | ε
    ");
    let eps = remove_epsilons(&g);
    assert_eq!(eps.derived, vec![production("S", "x")]);

    let g = grammar("
        S -> A x B y
        A -> a | ε
        B -> b | ε
    ");
    let eps = remove_epsilons(&g);
    assert_eq!(eps.derived, vec![production("S", "x y")]);
}

#[test]
fn same_non_empty_language() {
    let g = grammar("
        S -> A b A | c
        A -> a | ε
    ");
    let g2 = remove_epsilons(&g).grammar;
    assert!(!g2.has_empty_productions());
    for sentence in ["b", "a b", "b a", "a b a", "c"] {
        assert_eq!(parses(&g2, "S", sentence).len(), 1, "{}", sentence);
    }
    for sentence in ["a", "a a", "b b", "a a b", "c a"] {
        assert!(parses(&g2, "S", sentence).is_empty(), "{}", sentence);
    }
}

// The start symbol is nullable in the input grammar, but the rewritten
// grammar has no way to derive the empty sentence.
#[test]
fn nullable_start_loses_empty_derivation() {
    let g = grammar("
        S -> A A
        A -> a | ε
    ");
    let eps = remove_epsilons(&g);
    assert!(eps.nullable.contains(&Symbol::from("S")));
    expect![[r#"
        S -> A | A | A A
        A -> a
    "#]].assert_eq(&eps.grammar.to_string());

    let mut parser = ForestParser::new(&eps.grammar, tokens(""));
    assert!(parser.parse_all(&"S".into()).unwrap().is_empty());

    // the two single-`A` alternatives are distinct derivations of `a`
    assert_eq!(parses(&eps.grammar, "S", "a"), vec!["S(A(a))", "S(A(a))"]);
    assert_eq!(parses(&eps.grammar, "S", "a a"), vec!["S(A(a), A(a))"]);
}

#[test]
fn custom_marker() {
    let g = Grammar::parse_with_marker("S -> x O\nO -> o | <none>", "<none>").unwrap();
    let eps = remove_epsilons(&g);
    assert_eq!(eps.nullable, set(&["O"]));
    assert_eq!(parses(&eps.grammar, "S", "x"), vec!["S(x)"]);
    assert_eq!(parses(&eps.grammar, "S", "x o"), vec!["S(x, O(o))"]);
}
