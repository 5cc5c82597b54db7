//! Symbol frequency counting.

use crate::Symbol;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Occurrence count per symbol over one input stream.
///
/// Iteration is in ascending symbol order, which fixes the order in which
/// leaves are created when building a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol in `symbols`.
    pub fn from_symbols(symbols: &[S]) -> Self {
        symbols.iter().copied().collect()
    }

    /// Count for one symbol (0 if absent).
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The only symbol, if the alphabet has exactly one.
    pub fn sole_symbol(&self) -> Option<S> {
        match self.counts.len() {
            1 => self.counts.keys().next().copied(),
            _ => None,
        }
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
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

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
