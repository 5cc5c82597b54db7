//! Huffman encoder.

use crate::Symbol;
use crate::bitstream_msb::{MsbBitWriter, PackedBits};
use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use serde::{Deserialize, Serialize};

/// Everything needed to decode a payload: the tree (absent for alphabets of
/// fewer than two symbols) and the code table derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de> + Ord"
))]
pub struct HuffmanModel<S> {
    /// Decoding tree.
    pub tree: Option<HuffmanTree<S>>,
    /// Symbol -> code.
    pub codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanModel<S> {
    /// Build the model for a frequency table.
    pub fn from_frequencies(freq: &FrequencyTable<S>) -> Self {
        if let Some(symbol) = freq.sole_symbol() {
            return Self {
                tree: None,
                codes: CodeTable::single(symbol),
            };
        }

        match HuffmanTree::build(freq) {
            Some(tree) => Self {
                codes: CodeTable::from_tree(&tree),
                tree: Some(tree),
            },
            None => Self {
                tree: None,
                codes: CodeTable::empty(),
            },
        }
    }

    /// Number of distinct symbols the model can code.
    pub fn alphabet_size(&self) -> usize {
        self.codes.len()
    }
}

/// Encode `symbols` with a model built from their own frequencies.
///
/// - Empty input: no bits, empty code table, no tree
/// - One distinct symbol: one `0` bit per symbol, table `{symbol: "0"}`,
///   no tree
/// - Otherwise: the concatenated tree codes
pub fn encode<S: Symbol>(symbols: &[S]) -> (PackedBits, HuffmanModel<S>) {
    let freq = FrequencyTable::from_symbols(symbols);
    let model = HuffmanModel::from_frequencies(&freq);
    let mut writer = MsbBitWriter::with_capacity(model.codes.encoded_bits(&freq));

    // Every symbol has a code in its own model
    for symbol in symbols {
        if let Some(code) = model.codes.get(symbol) {
            writer.write_code(code);
        }
    }

    (writer.finish(), model)
}

/// Encode `symbols` with an existing code table.
///
/// Fails with [`HuffmanError::MissingCode`] if a symbol has no code.
pub fn encode_with<S: Symbol>(symbols: &[S], codes: &CodeTable<S>) -> Result<PackedBits> {
    let mut writer = MsbBitWriter::with_capacity(symbols.len() as u64 * 2);

    for symbol in symbols {
        let code = codes.get(symbol).ok_or_else(|| HuffmanError::MissingCode {
            symbol: format!("{:?}", symbol),
        })?;
        writer.write_code(code);
    }

    Ok(writer.finish())
}
