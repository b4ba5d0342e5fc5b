use super::*;

pub(crate) const ENGLISH: &str = include_str!("../grammars/english.grammar");

pub(crate) fn english() -> Grammar {
    ENGLISH.parse().unwrap()
}

pub(crate) fn grammar(text: &str) -> Grammar {
    text.parse().unwrap()
}

pub(crate) fn tokens(sentence: &str) -> Vec<Symbol> {
    sentence.split_whitespace().map(Symbol::from).collect()
}

/// Compact renderings of every tree of `start` over the whole sentence.
pub(crate) fn parses(g: &Grammar, start: &str, sentence: &str) -> Vec<String> {
    let mut parser = ForestParser::new(g, tokens(sentence));
    parser.parse_all(&start.into())
        .unwrap()
        .iter()
        .map(|t| t.to_string())
        .collect()
}

macro_rules! assert_matches {
    ($e:expr, $p:pat) => {
        let v = $e;
        if let $p = v { } else {
            panic!("assert fail {:?} does not match pattern {}", v, stringify!($p));
        }
    }
}

#[test]
fn sentence_with_attachment_ambiguity() {
    let trees = parse_sentence(&english(), "the dog saw a cat in the park", &ParseOptions::new("S")).unwrap();
    let compact: Vec<String> = trees.iter().map(|t| t.to_string()).collect();
    assert_eq!(compact, vec![
        "S(NP(Det(the), N(dog)), VP(V(saw), NP(NP(Det(a), N(cat)), PP(P(in), NP(Det(the), N(park))))))",
        "S(NP(Det(the), N(dog)), VP(VP(V(saw), NP(Det(a), N(cat))), PP(P(in), NP(Det(the), N(park)))))",
    ]);
}

#[test]
fn sentence_outside_language() {
    let trees = parse_sentence(&english(), "the cat barked", &ParseOptions::new("S")).unwrap();
    assert!(trees.is_empty());
    let trees = parse_sentence(&english(), "", &ParseOptions::new("S")).unwrap();
    assert!(trees.is_empty());
}

#[test]
fn sentence_with_unknown_start() {
    assert_matches!(
        parse_sentence(&english(), "the cat", &ParseOptions::new("Sentence")),
        Err(ArborError::UnknownSymbol(_))
    );
}

#[test]
fn epsilons_are_eliminated_by_default() {
    let g = grammar("S -> A b A\nA -> a | ε");
    let parse = |sentence: &str, options: &ParseOptions| -> Vec<String> {
        parse_sentence(&g, sentence, options).unwrap().iter().map(|t| t.to_string()).collect()
    };

    let options = ParseOptions::new("S");
    assert_eq!(parse("b", &options), vec!["S(b)"]);
    assert_eq!(parse("a b", &options), vec!["S(A(a), b)"]);
    assert_eq!(parse("a b a", &options), vec!["S(A(a), b, A(a))"]);

    // left alone, an empty production simply never matches
    let options = ParseOptions::new("S").keep_epsilons();
    assert_eq!(parse("b", &options), Vec::<String>::new());
    assert_eq!(parse("a b a", &options), vec!["S(A(a), b, A(a))"]);
}
