//! Huffman decoder.
//!
//! Decoding walks the tree one bit at a time and never guesses: a payload
//! that ends inside a code, or a model that does not describe a proper tree,
//! is reported as [`HuffmanError::CorruptStream`].

use crate::Symbol;
use crate::bitstream_msb::{MsbBitReader, PackedBits};
use crate::codes::CodeTable;
use crate::encoder::HuffmanModel;
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Decoder bound to one validated model.
#[derive(Debug)]
pub struct HuffmanDecoder<'a, S> {
    mode: Mode<'a, S>,
}

#[derive(Debug)]
enum Mode<'a, S> {
    /// No symbols at all.
    Empty,
    /// One symbol, repeated once per bit.
    Single(S),
    /// Tree walk.
    Tree(&'a HuffmanTree<S>),
}

impl<'a, S: Symbol> HuffmanDecoder<'a, S> {
    /// Validate `model` and prepare to decode with it.
    ///
    /// The code table must be exactly the one the tree derives; a stored
    /// model whose halves disagree is rejected up front.
    pub fn new(model: &'a HuffmanModel<S>) -> Result<Self> {
        let mode = match &model.tree {
            Some(tree) => {
                tree.validate()?;
                if CodeTable::from_tree(tree) != model.codes {
                    return Err(HuffmanError::corrupt(0, "code table disagrees with tree"));
                }
                Mode::Tree(tree)
            }
            None => match model.codes.len() {
                0 => Mode::Empty,
                1 => match model.codes.sole_entry() {
                    Some((symbol, "0")) => Mode::Single(symbol),
                    _ => return Err(HuffmanError::corrupt(0, "single-symbol code must be 0")),
                },
                _ => return Err(HuffmanError::corrupt(0, "code table without tree")),
            },
        };

        Ok(Self { mode })
    }

    /// Decode a payload back into symbols.
    pub fn decode(&self, bits: &PackedBits) -> Result<Vec<S>> {
        if !bits.is_consistent() {
            return Err(HuffmanError::corrupt(
                0,
                "payload length does not match bit length",
            ));
        }

        match self.mode {
            Mode::Empty if bits.is_empty() => Ok(Vec::new()),
            Mode::Empty => Err(HuffmanError::corrupt(0, "bits present but no symbols")),
            Mode::Single(symbol) => decode_single(symbol, bits),
            Mode::Tree(tree) => decode_tree(tree, bits),
        }
    }
}

fn decode_single<S: Symbol>(symbol: S, bits: &PackedBits) -> Result<Vec<S>> {
    let mut reader = MsbBitReader::new(bits);
    let count = usize::try_from(bits.bit_len())
        .map_err(|_| HuffmanError::corrupt(0, "payload too long for this platform"))?;

    while let Some(bit) = reader.read_bit() {
        if bit {
            return Err(HuffmanError::corrupt(
                reader.bits_read() - 1,
                "unexpected 1 bit in single-symbol stream",
            ));
        }
    }

    Ok(vec![symbol; count])
}

fn decode_tree<S: Symbol>(tree: &HuffmanTree<S>, bits: &PackedBits) -> Result<Vec<S>> {
    let mut reader = MsbBitReader::new(bits);
    let mut output = Vec::with_capacity(bits.bit_len().min(1 << 24) as usize / 2);

    let root = tree.root();
    let mut current = root;

    while let Some(bit) = reader.read_bit() {
        let next = match tree.node(current) {
            Some(HuffmanNode::Internal { left, right, .. }) => {
                if bit {
                    *right
                } else {
                    *left
                }
            }
            Some(HuffmanNode::Leaf { .. }) => {
                return Err(HuffmanError::corrupt(
                    reader.bits_read() - 1,
                    "descent past a leaf",
                ));
            }
            None => {
                return Err(HuffmanError::corrupt(
                    reader.bits_read() - 1,
                    "missing child during descent",
                ));
            }
        };

        match tree.node(next) {
            Some(HuffmanNode::Leaf { symbol, .. }) => {
                output.push(*symbol);
                current = root;
            }
            Some(HuffmanNode::Internal { .. }) => current = next,
            None => {
                return Err(HuffmanError::corrupt(
                    reader.bits_read() - 1,
                    "missing child during descent",
                ));
            }
        }
    }

    if current != root {
        return Err(HuffmanError::corrupt(
            reader.bits_read(),
            "stream ended inside a code",
        ));
    }

    Ok(output)
}

/// Decode `bits` with `model`.
pub fn decode<S: Symbol>(bits: &PackedBits, model: &HuffmanModel<S>) -> Result<Vec<S>> {
    HuffmanDecoder::new(model)?.decode(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_decode_roundtrip() {
        let symbols: Vec<char> = "abracadabra".chars().collect();
        let (bits, model) = encode(&symbols);
        assert_eq!(decode(&bits, &model).unwrap(), symbols);
    }

    #[test]
    fn test_decode_single_symbol() {
        let (bits, model) = encode(&['a'; 4]);
        assert_eq!(decode(&bits, &model).unwrap(), vec!['a'; 4]);
    }

    #[test]
    fn test_decode_empty() {
        let (bits, model) = encode::<char>(&[]);
        assert!(decode(&bits, &model).unwrap().is_empty());
    }

    #[test]
    fn test_decode_truncated_stream() {
        let symbols: Vec<char> = "abc".chars().collect();
        let (_, model) = encode(&symbols);

        // c=0, a=10, b=11; "1" stops halfway into a or b
        let bits = PackedBits::from_bit_str("01").unwrap();
        let err = decode(&bits, &model).unwrap_err();
        assert_eq!(
            err,
            HuffmanError::CorruptStream {
                bit_position: 2,
                reason: "stream ended inside a code"
            }
        );
    }

    #[test]
    fn test_decode_single_symbol_rejects_one_bits() {
        let (_, model) = encode(&['z'; 3]);
        let bits = PackedBits::from_bit_str("001").unwrap();
        assert!(matches!(
            decode(&bits, &model),
            Err(HuffmanError::CorruptStream {
                bit_position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_bits_without_symbols() {
        let (_, model) = encode::<char>(&[]);
        let bits = PackedBits::from_bit_str("0").unwrap();
        assert!(decode(&bits, &model).is_err());
    }

    #[test]
    fn test_decode_rejects_inconsistent_payload() {
        let (_, model) = encode(&['a', 'b']);
        let bits: PackedBits =
            serde_json::from_str(r#"{"bytes":[0,0,0],"bit_len":2}"#).unwrap();
        assert!(decode(&bits, &model).is_err());
    }

    #[test]
    fn test_decode_rejects_mismatched_table() {
        let (bits, mut model) = encode(&['a', 'b', 'b']);
        model.codes = CodeTable::single('a');
        assert_eq!(
            decode(&bits, &model).unwrap_err(),
            HuffmanError::corrupt(0, "code table disagrees with tree")
        );
    }

    #[test]
    fn test_decoder_reuse() {
        let symbols: Vec<u32> = vec![256, 97, 97, 98, 256, 97];
        let (bits, model) = encode(&symbols);
        let decoder = HuffmanDecoder::new(&model).unwrap();
        assert_eq!(decoder.decode(&bits).unwrap(), symbols);
        assert_eq!(decoder.decode(&bits).unwrap(), symbols);
    }
}
