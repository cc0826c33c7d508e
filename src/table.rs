//! Symbol ↔ code tables.
//!
//! A code is the path from the root of a [`HuffmanTree`] to a leaf: each step
//! to the left appends a `0`, each step to the right a `1`. Leaves are never
//! ancestors of one another, so the resulting codes form a prefix code.

use std::collections::{BTreeMap, HashMap};

use crate::bits::{BitStr, Bits};
use crate::frequency::Symbol;
use crate::tree::{HuffmanTree, Node};

/// Bijective mapping between symbols and their prefix-free codes.
///
/// Both directions are kept: symbol → code for encoding and code → symbol for
/// exact-match lookup while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Bits>,
    lookup: HashMap<Bits, S>,
    max_code_len: usize,
}

impl<S: Symbol> CodeTable<S> {
    /// Assign a code to every leaf of `tree`.
    pub fn generate(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = Bits::new();
        Self::walk(tree.root(), &mut path, &mut codes);

        let lookup = codes.iter().map(|(&s, code)| (code.clone(), s)).collect();
        let max_code_len = codes.values().map(|code| code.len()).max().unwrap_or(0);
        log::debug!(
            "generated {} codes, longest {} bits",
            codes.len(),
            max_code_len
        );

        Self {
            codes,
            lookup,
            max_code_len,
        }
    }

    fn walk(node: &Node<S>, path: &mut Bits, codes: &mut BTreeMap<S, Bits>) {
        match node {
            Node::Leaf { symbol, .. } => {
                debug_assert!(!path.is_empty(), "leaf at the root has no code");
                codes.insert(*symbol, path.clone());
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                Self::walk(left, path, codes);
                path.pop();

                path.push(true);
                Self::walk(right, path, codes);
                path.pop();
            }
            Node::Placeholder => {}
        }
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&BitStr> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol(&self, code: &BitStr) -> Option<S> {
        self.lookup.get(code).copied()
    }

    /// Returns `true` if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&BitStr> = self.codes.values().map(|c| c.as_bitslice()).collect();
        sorted.sort();
        // Any prefix sorts directly before some code that extends it.
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

impl<S> CodeTable<S> {
    /// Length in bits of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitStr)> + '_ {
        self.codes.iter().map(|(s, code)| (s, code.as_bitslice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{format_bits, parse_bits};

    fn table_for(input: &[u8]) -> CodeTable<u8> {
        CodeTable::generate(&HuffmanTree::from_symbols(input).unwrap())
    }

    fn code_of(table: &CodeTable<u8>, symbol: u8) -> String {
        format_bits(table.get(&symbol).unwrap())
    }

    #[test]
    fn test_single_symbol_code_is_one_bit() {
        let table = table_for(b"aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code_of(&table, b'a'), "0");
        assert_eq!(table.max_code_len(), 1);
    }

    #[test]
    fn test_two_symbols() {
        let table = table_for(b"ab");
        assert_eq!(code_of(&table, b'a'), "0");
        assert_eq!(code_of(&table, b'b'), "1");
    }

    #[test]
    fn test_balanced_four_symbols() {
        let table = table_for(b"abcd");
        let codes: Vec<String> = table.iter().map(|(_, c)| format_bits(c)).collect();
        assert_eq!(codes, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_skewed_distribution() {
        let table = table_for(b"aaaaaaaab");
        assert!(table.get(&b'a').unwrap().len() <= table.get(&b'b').unwrap().len());

        let table = table_for(b"abracadabra");
        assert_eq!(code_of(&table, b'a').len(), 1);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_reverse_lookup_is_exact() {
        let table = table_for(b"abracadabra");
        for (&symbol, code) in table.iter() {
            assert_eq!(table.symbol(code), Some(symbol));
        }
        // "1" is a proper prefix of several codes, but not a code itself.
        assert_eq!(table.symbol(&parse_bits("1").unwrap()), None);
        assert_eq!(table.symbol(&Bits::new()), None);
    }
}
