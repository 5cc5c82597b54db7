//! Code table derivation.

use crate::Symbol;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbol -> bit string (`0`/`1` characters) mapping.
///
/// Tables derived from a tree are prefix-free. A single-symbol alphabet maps
/// its symbol to `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Ord"
))]
pub struct CodeTable<S> {
    codes: BTreeMap<S, String>,
}

impl<S: Symbol> CodeTable<S> {
    /// Table with no entries (empty input).
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Table for a one-symbol alphabet.
    pub fn single(symbol: S) -> Self {
        Self {
            codes: BTreeMap::from([(symbol, "0".to_string())]),
        }
    }

    /// Assign codes by depth-first traversal: `0` on every left descent,
    /// `1` on every right descent.
    ///
    /// Child indices outside the arena are skipped; run
    /// [`HuffmanTree::validate`] first on untrusted trees.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root(), String::new())];

        while let Some((index, prefix)) = stack.pop() {
            match tree.node(index) {
                Some(HuffmanNode::Leaf { symbol, .. }) => {
                    codes.insert(*symbol, prefix);
                }
                Some(HuffmanNode::Internal { left, right, .. }) => {
                    let mut right_code = prefix.clone();
                    right_code.push('1');
                    let mut left_code = prefix;
                    left_code.push('0');
                    stack.push((*right, right_code));
                    stack.push((*left, left_code));
                }
                None => {}
            }
        }

        Self { codes }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The only entry, if the table has exactly one.
    pub fn sole_entry(&self) -> Option<(S, &str)> {
        match self.codes.len() {
            1 => self
                .codes
                .iter()
                .next()
                .map(|(&symbol, code)| (symbol, code.as_str())),
            _ => None,
        }
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Total payload bits for a stream with these frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable<S>) -> u64 {
        freq.iter()
            .map(|(symbol, count)| self.get(&symbol).map_or(0, |code| code.len() as u64 * count))
            .sum()
    }

    /// Check that no code is a prefix of another.
    ///
    /// Sorting the codes puts any prefix directly before one of the codes it
    /// prefixes, so only neighbours need comparing.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}
