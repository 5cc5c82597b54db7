//! Huffman tree construction.
//!
//! The tree lives in a flat arena: every node is addressed by its index and
//! an internal node owns the indices of its two children. The arena index
//! doubles as the node's creation sequence number, which is the tie-breaker
//! when two nodes carry the same weight. Identical frequency tables therefore
//! always produce identical trees.

use crate::Symbol;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

/// A node in the Huffman tree arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuffmanNode<S> {
    /// A symbol with its frequency.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Occurrence count.
        weight: u64,
    },
    /// Two merged subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Arena index of the `0` branch.
        left: usize,
        /// Arena index of the `1` branch.
        right: usize,
    },
}

impl<S> HuffmanNode<S> {
    /// Weight of the subtree rooted at this node.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Check if this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// Huffman tree for alphabets of two or more symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanTree<S> {
    /// Arena of nodes, in creation order.
    nodes: Vec<HuffmanNode<S>>,
    /// Index of the root node.
    root: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build a tree from symbol frequencies.
    ///
    /// Returns `None` when the table holds fewer than two symbols; those
    /// alphabets are coded without a tree.
    ///
    /// # Algorithm
    ///
    /// 1. Create one leaf per symbol, in ascending symbol order
    /// 2. Pop the two lightest nodes (ties go to the older node)
    /// 3. Merge them under a new internal node, first popped on the left
    /// 4. Push the merged node back; repeat until one node remains
    pub fn build(freq: &FrequencyTable<S>) -> Option<Self> {
        if freq.len() < 2 {
            return None;
        }

        let mut nodes = Vec::with_capacity(freq.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(freq.len());

        for (symbol, weight) in freq.iter() {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode::Leaf { symbol, weight });
        }

        while heap.len() > 1 {
            let (Some(Reverse((w1, left))), Some(Reverse((w2, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };

            let weight = w1 + w2;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode::Internal {
                weight,
                left,
                right,
            });
        }

        let Reverse((_, root)) = heap.pop()?;
        Some(Self { nodes, root })
    }

    /// Index of the root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Node at `index`, if it exists.
    pub fn node(&self, index: usize) -> Option<&HuffmanNode<S>> {
        self.nodes.get(index)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[HuffmanNode<S>] {
        &self.nodes
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Check that the arena forms a proper tree.
    ///
    /// A tree built by [`build`](Self::build) always passes. Arenas that came
    /// from storage may not: the root must be an internal node, every child
    /// index must be in range, every node must be reachable from the root
    /// exactly once, and no symbol may sit on more than one leaf.
    pub fn validate(&self) -> Result<()> {
        match self.nodes.get(self.root) {
            Some(HuffmanNode::Internal { .. }) => {}
            Some(HuffmanNode::Leaf { .. }) => {
                return Err(HuffmanError::corrupt(0, "tree root is a leaf"));
            }
            None => return Err(HuffmanError::corrupt(0, "tree root outside arena")),
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        let mut symbols = BTreeSet::new();

        while let Some(index) = stack.pop() {
            let Some(seen) = visited.get_mut(index) else {
                return Err(HuffmanError::corrupt(0, "child index outside arena"));
            };
            if *seen {
                return Err(HuffmanError::corrupt(0, "tree node reached twice"));
            }
            *seen = true;

            match self.nodes[index] {
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
                HuffmanNode::Leaf { symbol, .. } => {
                    if !symbols.insert(symbol) {
                        return Err(HuffmanError::corrupt(0, "duplicate leaf symbol"));
                    }
                }
            }
        }

        if visited.iter().any(|&seen| !seen) {
            return Err(HuffmanError::corrupt(0, "tree has unreachable nodes"));
        }

        Ok(())
    }
}
