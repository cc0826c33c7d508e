//! Huffman decoding.
//!
//! Decoding accumulates bits one at a time and looks the accumulated bits up
//! as a whole code. A match emits the symbol and starts a fresh accumulator.
//! Because the table is prefix-free the first match is the only possible one.

use crate::bits::{BitStr, Bits};
use crate::error::{Error, Result};
use crate::frequency::Symbol;
use crate::table::CodeTable;

/// Huffman decoder.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'t, S> {
    table: &'t CodeTable<S>,
}

impl<'t, S: Symbol> HuffmanDecoder<'t, S> {
    /// Create a decoder for bits produced with `table`.
    pub fn new(table: &'t CodeTable<S>) -> Self {
        Self { table }
    }

    /// Decode a bit stream into a symbol sequence.
    ///
    /// # Errors
    /// - `Error::CorruptStream` if the accumulated bits grow longer than the
    ///   longest code without matching one.
    /// - `Error::TruncatedStream` if the stream ends in the middle of a code.
    pub fn decode(&self, bits: &BitStr) -> Result<Vec<S>> {
        let max_len = self.table.max_code_len();
        let mut out = Vec::new();
        let mut acc = Bits::with_capacity(max_len);
        let mut start = 0;

        for (offset, bit) in bits.iter().by_vals().enumerate() {
            acc.push(bit);
            if let Some(symbol) = self.table.symbol(&acc) {
                out.push(symbol);
                acc.clear();
                start = offset + 1;
            } else if acc.len() > max_len {
                return Err(Error::CorruptStream { offset: start });
            }
        }

        if !acc.is_empty() {
            return Err(Error::TruncatedStream {
                dangling: acc.len(),
            });
        }

        log::debug!("decoded {} bits into {} symbols", bits.len(), out.len());
        Ok(out)
    }
}

/// Decode `bits` with the table they were encoded with.
///
/// # Errors
/// See [`HuffmanDecoder::decode`].
pub fn decode<S: Symbol>(bits: &BitStr, table: &CodeTable<S>) -> Result<Vec<S>> {
    HuffmanDecoder::new(table).decode(bits)
}
