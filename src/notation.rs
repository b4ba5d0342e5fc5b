//! Reading grammars from text.
//!
//! ```text
//! # a comment
//! S   -> NP VP
//! NP  -> Det N | NP PP
//! Opt -> x | ε
//! ```
//!
//! One non-terminal per line, alternatives separated by `|`, symbols by
//! whitespace. `::=` and `→` are accepted in place of `->`. A left side that
//! appears on several lines collects the alternatives of all of them.

use crate::grammar::{Grammar, GrammarBuilder, Production, Symbol};
use crate::ArborError;

use regex::Regex;
use std::path::Path;

const RULE: &str = r"^(?P<lhs>[^\s|]+)\s*(?:->|::=|→)(?P<rhs>.*)$";

fn syntax(line: usize, message: impl Into<String>) -> ArborError {
    ArborError::Syntax { line, message: message.into() }
}

pub(crate) fn parse_grammar(text: &str, builder: GrammarBuilder) -> Result<Grammar, ArborError> {
    let rule = Regex::new(RULE)?;
    let mut builder = builder;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let caps = rule.captures(line)
            .ok_or_else(|| syntax(line_no, format!("expected `lhs -> rhs`, found `{}`", line)))?;
        let lhs = Symbol::from(&caps["lhs"]);
        for alternative in caps["rhs"].split('|') {
            let rhs: Production = alternative.split_whitespace().collect();
            if rhs.is_empty() {
                return Err(syntax(line_no, format!("empty alternative for `{}`", lhs)));
            }
            builder.add_rule(lhs.clone(), rhs);
        }
    }
    builder.build()
}

impl std::str::FromStr for Grammar {
    type Err = ArborError;

    fn from_str(text: &str) -> Result<Grammar, ArborError> {
        parse_grammar(text, Grammar::builder())
    }
}

impl Grammar {
    /// Reads a grammar file in the text format of [`std::str::FromStr`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Grammar, ArborError> {
        let text = fs_err::read_to_string(path.as_ref())?;
        text.parse()
    }

    /// Like `str::parse`, but with `marker` spelling the empty string.
    pub fn parse_with_marker(text: &str, marker: impl Into<Symbol>) -> Result<Grammar, ArborError> {
        parse_grammar(text, Grammar::builder().empty_marker(marker))
    }
}

#[cfg(test)]
#[path = "tests/notation.rs"]
mod tests_for_notation;
