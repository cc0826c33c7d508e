#![no_main]
use huffman::{decode, encode, Bits, Error, HuffmanEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Vec<u8>| {
    let encoded = match encode(&input) {
        Ok(encoded) => encoded,
        Err(Error::EmptyInput) => {
            assert!(input.is_empty());
            return;
        }
        Err(e) => panic!("unexpected encode error: {e}"),
    };

    assert!(encoded.table.is_prefix_free());

    let decoded = decode(&encoded.bits, &encoded.table).unwrap();
    assert_eq!(input, decoded);

    // The raw input bytes are almost never a valid encoding.
    let foreign = Bits::from_vec(input);
    match decode(&foreign, &encoded.table) {
        Ok(symbols) => {
            let bits = HuffmanEncoder::new(encoded.table).encode(&symbols).unwrap();
            assert_eq!(bits, foreign);
        }
        Err(Error::TruncatedStream { .. }) | Err(Error::CorruptStream { .. }) => {}
        Err(e) => panic!("unexpected decode error: {e}"),
    }
});
