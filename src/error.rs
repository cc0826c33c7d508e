//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No symbols were supplied, so no tree can be built.
    #[error("empty input: cannot build a Huffman tree from zero symbols")]
    EmptyInput,

    /// The bit stream ended in the middle of a code.
    #[error("truncated stream: {dangling} trailing bit(s) do not form a complete code")]
    TruncatedStream {
        /// Number of bits left in the accumulator when the stream ran out.
        dangling: usize,
    },

    /// The bit stream contains a run of bits that no code in the table matches.
    #[error("corrupt stream: no code matches the bits starting at offset {offset}")]
    CorruptStream {
        /// Bit offset at which the unmatched code began.
        offset: usize,
    },

    /// The code table has no entry for a symbol being encoded.
    #[error("symbol {0} has no code in this table")]
    UnknownSymbol(String),

    /// A textual bit string contained something other than `0` or `1`.
    #[error("invalid bit character: {0:?}")]
    InvalidBit(char),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
