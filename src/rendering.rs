//! Text renderings of parse trees.

use crate::{Symbol, Tree};

pub trait Rendered {
    fn rendered(&self) -> String;
}

/// A tree renders as its [`outline`].
impl Rendered for Tree {
    fn rendered(&self) -> String {
        outline(self)
    }
}

/// A token sequence renders as the sentence it came from.
impl Rendered for [Symbol] {
    fn rendered(&self) -> String {
        self.iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const INDENT: &str = "  ";

/// One node per line, children two spaces deeper than their parent.
///
/// ```text
/// NP
///   Det
///     the
///   N
///     cat
/// ```
pub fn outline(tree: &Tree) -> String {
    let mut accum = String::new();
    outline_into(&mut accum, "", tree);
    accum
}

fn outline_into(accum: &mut String, indent: &str, tree: &Tree) {
    accum.push_str(indent);
    accum.push_str(tree.label().as_str());
    accum.push('\n');
    let deeper = format!("{indent}{INDENT}");
    for child in tree.children() {
        outline_into(accum, &deeper, child);
    }
}

/// Nested `tree(...)` calls, as taken by tree-drawing macros:
///
/// ```text
/// tree("NP",
///   tree("Det",
///     tree("the")
///   ),
///   tree("N",
///     tree("cat")
///   )
/// )
/// ```
pub fn drawing(tree: &Tree) -> String {
    let mut accum = String::new();
    drawing_into(&mut accum, "", tree);
    accum
}

fn drawing_into(accum: &mut String, indent: &str, tree: &Tree) {
    match tree {
        Tree::Leaf(value) => {
            accum.push_str(&format!("{indent}tree(\"{}\")", escaped(value.as_str())));
        }
        Tree::Internal(label, children) => {
            accum.push_str(&format!("{indent}tree(\"{}\",\n", escaped(label.as_str())));
            let deeper = format!("{indent}{INDENT}");
            for (idx, child) in children.iter().enumerate() {
                if idx > 0 {
                    accum.push_str(",\n");
                }
                drawing_into(accum, &deeper, child);
            }
            accum.push('\n');
            accum.push_str(indent);
            accum.push(')');
        }
    }
}

fn escaped(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "tests/rendering.rs"]
mod tests_for_rendering;
