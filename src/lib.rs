//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter, `E`, a single dot. Huffman coding
//! does the same thing systematically: frequent symbols get short codes, rare
//! symbols get long ones, and no code is the beginning of another, so a
//! stream of codes can be split back into symbols without any separators.
//!
//! ## The Problem
//!
//! A fixed-width encoding spends the same number of bits on every symbol,
//! regardless of how often it appears. Given the frequencies of the symbols
//! in a message, we want the prefix code that minimises the total encoded
//! length.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merge: provably optimal prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1993  Deflate     Huffman coding becomes the back end of zlib and gzip
//! ```
//!
//! ## Algorithm
//!
//! 1. Count the occurrences of each symbol ([`FrequencyTable`]).
//! 2. Put one leaf per symbol into a min-priority queue. Repeatedly remove the
//!    two lightest subtrees and join them under a new node whose weight is
//!    their sum ([`HuffmanTree`]).
//! 3. Walk the tree: a step left appends `0`, a step right appends `1`. The
//!    path to each leaf is that symbol's code ([`CodeTable`]).
//! 4. Encode by concatenating codes; decode by accumulating bits until they
//!    form exactly one code.
//!
//! Ties between equal weights are broken by symbol order, so the same input
//! always produces the same codes.
//!
//! ## Complexity Analysis
//!
//! - **Tree construction**: $O(k \log k)$ for $k$ distinct symbols.
//! - **Encoding**: $O(n)$ code copies for $n$ symbols.
//! - **Decoding**: $O(n \cdot L)$ bit appends and lookups, $L$ the longest code.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is no tree for zero symbols, so encoding fails
//!    with [`Error::EmptyInput`].
//! 2. **Foreign bits**: bits that were not produced by the table fail with
//!    [`Error::TruncatedStream`] or [`Error::CorruptStream`].
//! 3. **Lost table**: the codes are not self-describing; the [`CodeTable`]
//!    must travel with the bits.
//!
//! ## Example
//!
//! ```
//! let encoded = huffman::encode(b"abracadabra")?;
//! assert_eq!(encoded.bits.len(), 23);
//!
//! let decoded = huffman::decode(&encoded.bits, &encoded.table)?;
//! assert_eq!(decoded, b"abracadabra");
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod table;
pub mod tree;

pub use bits::{format_bits, parse_bits, BitStr, Bits};
pub use decoder::{decode, HuffmanDecoder};
pub use encoder::{encode, Encoded, HuffmanEncoder};
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, Symbol};
pub use table::CodeTable;
pub use tree::{HuffmanTree, Node};
