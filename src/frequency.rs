//! Symbol frequency counting.
//!
//! The first stage of the pipeline: every distinct symbol of the input is
//! mapped to the number of times it occurs.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of the alphabet.
///
/// The `Ord` implementation doubles as the tie-break order used when two
/// subtrees have the same frequency, so it must be a total order. For `u8`
/// and `char` that is ascending code-point value.
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}

/// Occurrence counts for each distinct symbol.
///
/// Every stored count is positive. Iteration is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the occurrences of each symbol in `symbols`.
    pub fn count(symbols: &[S]) -> Self {
        symbols.iter().copied().collect()
    }

    /// Build a table from precomputed `(symbol, count)` pairs.
    ///
    /// Pairs with a zero count are dropped and repeated symbols are summed.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = BTreeMap::new();
        for (symbol, count) in counts.into_iter().filter(|&(_, c)| c > 0) {
            *table.entry(symbol).or_insert(0) += count;
        }
        Self { counts: table }
    }

    /// Count for `symbol`, if it occurred at all.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in iter {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl<S> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty() {
        let table = FrequencyTable::<u8>::count(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_count_abracadabra() {
        let table = FrequencyTable::count(b"abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(&b'a'), Some(5));
        assert_eq!(table.get(&b'b'), Some(2));
        assert_eq!(table.get(&b'r'), Some(2));
        assert_eq!(table.get(&b'c'), Some(1));
        assert_eq!(table.get(&b'd'), Some(1));
        assert_eq!(table.get(&b'z'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_iter_is_sorted_by_symbol() {
        let table: FrequencyTable<char> = "zebra".chars().collect();
        let symbols: Vec<char> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'e', 'r', 'z']);
    }

    #[test]
    fn test_from_counts_skips_zero_and_merges() {
        let table = FrequencyTable::from_counts([(b'x', 0), (b'y', 3), (b'y', 2), (b'z', 1)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&b'x'), None);
        assert_eq!(table.get(&b'y'), Some(5));
        assert_eq!(table.total(), 6);
    }
}
