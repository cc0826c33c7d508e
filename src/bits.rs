//! Bit-string types shared by codes and encoded streams.
//!
//! Bits are packed most-significant-bit first into bytes, so the first code
//! of a message lands in the high bits of the first byte.

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// An owned, bit-packed sequence of bits.
pub type Bits = BitVec<u8, Msb0>;

/// A borrowed view of a bit sequence.
pub type BitStr = BitSlice<u8, Msb0>;

/// Parse a string of `0` and `1` characters.
///
/// # Errors
/// Returns `Error::InvalidBit` for the first character that is not a binary digit.
pub fn parse_bits(text: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => return Err(Error::InvalidBit(other)),
        }
    }
    Ok(bits)
}

/// Render bits as a string of `0` and `1` characters.
pub fn format_bits(bits: &BitStr) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let bits = parse_bits("1011001").unwrap();
        assert_eq!(bits.len(), 7);
        assert_eq!(bits.as_raw_slice(), &[0b1011_0010]);
        assert_eq!(format_bits(&bits), "1011001");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_bits("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        assert_eq!(parse_bits("0102"), Err(Error::InvalidBit('2')));
        assert_eq!(parse_bits("01 1"), Err(Error::InvalidBit(' ')));
    }
}
