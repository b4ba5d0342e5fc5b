//! Prints every parse tree of a sentence.
//!
//! ```text
//! arbor [--grammar PATH] [--start SYM] [--keep-epsilons] [--draw] [--] <token>...
//! ```
//!
//! Without `--grammar` the built-in English fragment is used, and with no
//! tokens its demo sentence.

use arbor::rendering::{drawing, outline};
use arbor::{parse_sentence, ArborError, Grammar, ParseOptions};

const ENGLISH: &str = include_str!("../../grammars/english.grammar");
const DEMO_SENTENCE: &str = "the dog saw a cat in the park";

const USAGE: &str = "usage: arbor [--grammar PATH] [--start SYM] [--keep-epsilons] [--draw] [--] <token>...";

struct Invocation {
    grammar_path: Option<String>,
    start: String,
    keep_epsilons: bool,
    draw: bool,
    tokens: Vec<String>,
}

fn invocation(mut args: impl Iterator<Item = String>) -> Result<Invocation, String> {
    let mut inv = Invocation {
        grammar_path: None,
        start: "S".to_string(),
        keep_epsilons: false,
        draw: false,
        tokens: Vec::new(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--grammar" => inv.grammar_path = Some(args.next().ok_or("--grammar needs a path")?),
            "--start" => inv.start = args.next().ok_or("--start needs a symbol")?,
            "--keep-epsilons" => inv.keep_epsilons = true,
            "--draw" => inv.draw = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            "--" => inv.tokens.extend(args.by_ref()),
            s if s.starts_with("--") => return Err(format!("unknown flag `{}`\n{}", s, USAGE)),
            _ => inv.tokens.push(arg),
        }
    }
    Ok(inv)
}

fn run(inv: Invocation) -> Result<(), ArborError> {
    let grammar: Grammar = match &inv.grammar_path {
        Some(path) => Grammar::from_path(path)?,
        None => ENGLISH.parse()?,
    };
    let sentence = if inv.tokens.is_empty() { DEMO_SENTENCE.to_string() } else { inv.tokens.join(" ") };

    let mut options = ParseOptions::new(inv.start.as_str());
    if inv.keep_epsilons {
        options = options.keep_epsilons();
    }
    let trees = parse_sentence(&grammar, &sentence, &options)?;
    if trees.is_empty() {
        println!("no parse");
        return Ok(());
    }
    for (idx, tree) in trees.iter().enumerate() {
        println!("Parse tree {}:", idx + 1);
        if inv.draw {
            println!("#{}", drawing(tree));
        } else {
            print!("{}", outline(tree));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::invocation;

    fn args(line: &str) -> impl Iterator<Item = String> + '_ {
        line.split_whitespace().map(String::from)
    }

    #[test]
    fn grammar_comes_only_from_the_flag() {
        let inv = invocation(args("Cargo.toml the cat")).unwrap();
        assert_eq!(inv.grammar_path, None);
        assert_eq!(inv.tokens, vec!["Cargo.toml", "the", "cat"]);

        let inv = invocation(args("--grammar g.txt --start NP --draw the cat")).unwrap();
        assert_eq!(inv.grammar_path.as_deref(), Some("g.txt"));
        assert_eq!(inv.start, "NP");
        assert!(inv.draw);
        assert_eq!(inv.tokens, vec!["the", "cat"]);
    }

    #[test]
    fn bad_invocations() {
        assert!(invocation(args("--grammar")).is_err());
        assert!(invocation(args("--frobnicate")).is_err());
        let inv = invocation(args("-- --draw")).unwrap();
        assert!(!inv.draw);
        assert_eq!(inv.tokens, vec!["--draw"]);
    }
}

fn main() {
    let inv = match invocation(std::env::args().skip(1)) {
        Ok(inv) => inv,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(inv) {
        eprintln!("arbor: {}", e);
        std::process::exit(1);
    }
}
