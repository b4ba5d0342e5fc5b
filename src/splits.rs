//! Ways of dividing a span among the symbols of a right side.
//!
//! A span `[start, end)` handed to a right side of `n` symbols is cut at
//! `n - 1` positions strictly inside it, so every symbol receives a
//! non-empty, contiguous piece. Nothing is known up front about how long
//! each piece is, so all `C(end - start - 1, n - 1)` placements are produced,
//! in ascending lexicographic order of the cut positions.
//!
//! For `[0, 4)` and three symbols:
//!
//! ```text
//! [1, 2]  ->  [0,1) [1,2) [2,4)
//! [1, 3]  ->  [0,1) [1,3) [3,4)
//! [2, 3]  ->  [0,2) [2,3) [3,4)
//! ```

use std::iter::FusedIterator;

/// Lazily enumerates the cut-point lists for a span and an arity.
///
/// The enumeration is an odometer over strictly increasing positions: the
/// rightmost cut that can still move advances, and every cut after it is
/// packed up against it.
#[derive(Clone, Debug)]
pub struct Splits {
    end: usize,
    cuts: Vec<usize>,
    exhausted: bool,
}

impl Splits {
    pub fn new(start: usize, end: usize, arity: usize) -> Splits {
        let width = end.saturating_sub(start);
        let cut_count = arity.saturating_sub(1);
        Splits {
            end,
            cuts: (1..=cut_count).map(|k| start + k).collect(),
            exhausted: arity == 0 || width == 0 || cut_count >= width,
        }
    }
}

impl Iterator for Splits {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.cuts.clone();
        let k = self.cuts.len();
        let mut slot = k;
        loop {
            if slot == 0 {
                self.exhausted = true;
                break;
            }
            slot -= 1;
            // the last value slot `slot` may hold still leaves room for
            // the cuts after it
            let limit = self.end - (k - slot);
            if self.cuts[slot] < limit {
                self.cuts[slot] += 1;
                for next in slot + 1..k {
                    self.cuts[next] = self.cuts[next - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

impl FusedIterator for Splits {}

/// Every way to place `n - 1` cuts strictly inside `[i, j)`.
///
/// `n == 1` gives the single empty cut list when `i < j`; an empty span, or
/// more symbols than tokens, gives no splits at all.
pub fn possible_splits(i: usize, j: usize, n: usize) -> Vec<Vec<usize>> {
    Splits::new(i, j, n).collect()
}

/// The consecutive sub-spans that `cuts` carves out of `[start, end)`.
pub fn sub_spans(start: usize, cuts: &[usize], end: usize) -> Vec<(usize, usize)> {
    let bounds: Vec<usize> = std::iter::once(start)
        .chain(cuts.iter().copied())
        .chain(std::iter::once(end))
        .collect();
    bounds.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
#[path = "tests/splits.rs"]
mod tests_for_splits;
