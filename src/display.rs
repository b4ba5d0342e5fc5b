use crate::{Grammar, Production, Tree};

const NONTERM_BRACKETS: (char, char) = ('(', ')');

impl std::fmt::Display for Production {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut symbols = self.iter();
        if let Some(first) = symbols.next() {
            write!(w, "{}", first)?;
        }
        for s in symbols {
            write!(w, " {}", s)?;
        }
        Ok(())
    }
}

/// One line per non-terminal, `lhs -> alt | alt`, in declaration order.
///
/// This is the text format read by `str::parse::<Grammar>`, except for a
/// non-terminal with no productions left (possible only after
/// [`crate::remove_epsilons`]), which prints as a bare `E ->` that the text
/// format rejects.
impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (lhs, prods) in self.rules() {
            write!(w, "{} ->", lhs)?;
            for (idx, rhs) in prods.iter().enumerate() {
                if idx > 0 {
                    write!(w, " |")?;
                }
                write!(w, " {}", rhs)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

/// The compact single-line form, e.g. `NP(Det(the), N(cat))`.
impl std::fmt::Display for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tree::Leaf(value) => write!(w, "{}", value),
            Tree::Internal(label, children) => {
                let bd = NONTERM_BRACKETS;
                write!(w, "{}{}", label, bd.0)?;
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        write!(w, ", ")?;
                    }
                    write!(w, "{}", child)?;
                }
                write!(w, "{}", bd.1)
            }
        }
    }
}
