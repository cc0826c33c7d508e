//! Huffman encoding.

use crate::bits::Bits;
use crate::error::{Error, Result};
use crate::frequency::{FrequencyTable, Symbol};
use crate::table::CodeTable;
use crate::tree::HuffmanTree;

/// An encoded message together with the table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S> {
    /// Concatenated codes, in input order.
    pub bits: Bits,
    /// Table the bits were produced with.
    pub table: CodeTable<S>,
}

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S> {
    table: CodeTable<S>,
}

impl<S: Symbol> HuffmanEncoder<S> {
    /// Create an encoder that reuses an existing code table.
    pub fn new(table: CodeTable<S>) -> Self {
        Self { table }
    }

    /// Create an encoder from symbol frequencies.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `frequencies` is empty.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        log::trace!("symbol frequencies: {:?}", frequencies);
        let tree = HuffmanTree::build(frequencies)?;
        Ok(Self::new(CodeTable::generate(&tree)))
    }

    /// Create an encoder whose table is optimal for `symbols`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `symbols` is empty.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::count(symbols))
    }

    /// Encode a symbol sequence into a bit stream.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` if a symbol has no code in the table.
    pub fn encode(&self, symbols: &[S]) -> Result<Bits> {
        // Every code is at least one bit long.
        let mut bits = Bits::with_capacity(symbols.len());
        for symbol in symbols {
            let code = self
                .table
                .get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
            bits.extend_from_bitslice(code);
        }
        log::debug!("encoded {} symbols into {} bits", symbols.len(), bits.len());
        Ok(bits)
    }

    /// The table this encoder uses.
    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    /// Consume the encoder, returning its table.
    pub fn into_table(self) -> CodeTable<S> {
        self.table
    }
}

/// Build the optimal table for `symbols` and encode them with it.
///
/// # Errors
/// Returns `Error::EmptyInput` if `symbols` is empty.
pub fn encode<S: Symbol>(symbols: &[S]) -> Result<Encoded<S>> {
    let encoder = HuffmanEncoder::from_symbols(symbols)?;
    let bits = encoder.encode(symbols)?;
    Ok(Encoded {
        bits,
        table: encoder.into_table(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::format_bits;

    #[test]
    fn test_encode_empty_fails() {
        assert_eq!(encode::<u8>(&[]), Err(Error::EmptyInput));
        assert_eq!(encode::<char>(&[]).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_encode_single_symbol() {
        let encoded = encode(b"aaaa").unwrap();
        assert_eq!(format_bits(&encoded.bits), "0000");
        assert_eq!(encoded.table.len(), 1);
    }

    #[test]
    fn test_encode_abracadabra() {
        // a=0 r=10 b=110 c=1110 d=1111
        let encoded = encode(b"abracadabra").unwrap();
        assert_eq!(format_bits(&encoded.bits), "01101001110011110110100");
        assert_eq!(encoded.bits.len(), 23);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text: Vec<char> = "the quick brown fox jumps over the lazy dog".chars().collect();
        let first = encode(&text).unwrap();
        let second = encode(&text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reused_table_encodes_long_messages() {
        let encoder = HuffmanEncoder::from_symbols(b"abracadabra").unwrap();
        let message: Vec<u8> = b"dabrac".iter().copied().cycle().take(6000).collect();
        // d=1111 a=0 b=110 r=10 a=0 c=1110
        let bits = encoder.encode(&message).unwrap();
        assert_eq!(bits.len(), 1000 * 15);
        assert_eq!(format_bits(&bits[..15]), "111101101001110");
    }

    #[test]
    fn test_reused_table_rejects_unknown_symbol() {
        let encoder = HuffmanEncoder::from_symbols(b"abc").unwrap();
        assert!(encoder.encode(b"cab").is_ok());
        assert_eq!(
            encoder.encode(b"abz"),
            Err(Error::UnknownSymbol("122".to_string()))
        );
    }
}
