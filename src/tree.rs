//! Huffman tree construction.
//!
//! The tree is built greedily: the two lightest subtrees are repeatedly
//! merged under a new internal node until a single root remains.
//!
//! # Tie-breaking
//!
//! Subtrees are ordered by ascending frequency and then by the smallest
//! symbol they contain. Subtrees in the queue are disjoint, so no two of them
//! share that smallest symbol and the order is total: the same frequency
//! table always yields the same tree, and therefore the same codes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::{FrequencyTable, Symbol};

/// Huffman tree node.
///
/// Internal nodes own their children; the tree has no shared structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol stored at this leaf.
        symbol: S,
        /// Number of occurrences of `symbol`.
        freq: u64,
    },
    /// Two subtrees; `freq` is the sum of theirs.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
        /// Combined frequency of both subtrees.
        freq: u64,
    },
    /// Empty sibling of the only leaf in a single-symbol tree.
    ///
    /// It carries no symbol and receives no code.
    Placeholder,
}

impl<S> Node<S> {
    /// Frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
            Node::Placeholder => 0,
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
            _ => 0,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
            Node::Placeholder => 0,
        }
    }
}

/// A subtree waiting in the priority queue.
///
/// `key` is the smallest symbol in `node`.
#[derive(Debug)]
struct Pending<S> {
    freq: u64,
    key: S,
    node: Node<S>,
}

impl<S: Ord> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Pending<S> {}

impl<S: Ord> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl<S: Ord> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for a frequency table.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `frequencies` is empty.
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let mut pq: BinaryHeap<Pending<S>> = frequencies
            .iter()
            .map(|(symbol, freq)| Pending {
                freq,
                key: symbol,
                node: Node::Leaf { symbol, freq },
            })
            .collect();

        if pq.len() == 1 {
            // A lone root leaf would get the empty code.
            if let Some(only) = pq.pop() {
                let root = Node::merge(only.node, Node::Placeholder);
                log::trace!("huffman tree: {:?}", root);
                return Ok(Self { root });
            }
        }

        while pq.len() > 1 {
            let (Some(left), Some(right)) = (pq.pop(), pq.pop()) else {
                unreachable!("queue holds at least two subtrees");
            };
            pq.push(Pending {
                freq: left.freq + right.freq,
                key: left.key.min(right.key),
                node: Node::merge(left.node, right.node),
            });
        }

        let root = pq.pop().ok_or(Error::EmptyInput)?.node;
        log::trace!("huffman tree: {:?}", root);
        Ok(Self { root })
    }

    /// Count the symbols of `symbols` and build the tree for them.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `symbols` is empty.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Self::build(&FrequencyTable::count(symbols))
    }
}

impl<S> HuffmanTree<S> {
    /// The root node. Always `Node::Internal`.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight of the tree, equal to the length of the counted input.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
