/// Cartesian product of a list of pools, as an iterator of tuples.
///
/// The first pool varies slowest and the last fastest, like counting with an
/// odometer. No pools give exactly one (empty) tuple; any empty pool gives
/// none.
pub(crate) struct Cross<'a, T> {
    pools: Vec<&'a [T]>,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> Cross<'a, T> {
    pub(crate) fn new(pools: Vec<&'a [T]>) -> Self {
        let exhausted = pools.iter().any(|pool| pool.is_empty());
        Cross { odometer: vec![0; pools.len()], pools, exhausted }
    }
}

impl<'a, T: Clone> Iterator for Cross<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        let tuple = self.pools.iter()
            .zip(&self.odometer)
            .map(|(pool, &idx)| pool[idx].clone())
            .collect();
        let mut wheel = self.pools.len();
        'advance: loop {
            if wheel == 0 {
                self.exhausted = true;
                break 'advance;
            }
            wheel -= 1;
            self.odometer[wheel] += 1;
            if self.odometer[wheel] < self.pools[wheel].len() {
                break 'advance;
            }
            // wheel wrapped around; carry into the one on its left
            self.odometer[wheel] = 0;
        }
        Some(tuple)
    }
}
