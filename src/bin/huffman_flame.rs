use huffman::{HuffmanDecoder, HuffmanEncoder};

fn main() {
    let input = (0..10000)
        .map(|i: u32| b"etaoin shrdlu"[(i * i % 13) as usize])
        .collect::<Vec<_>>();

    for _ in 0..1000 {
        let encoder = HuffmanEncoder::from_symbols(&input).unwrap();
        let bits = encoder.encode(&input).unwrap();

        let decoder = HuffmanDecoder::new(encoder.table());
        let output = decoder.decode(&bits).unwrap();
        assert_eq!(input, output);
    }
}
