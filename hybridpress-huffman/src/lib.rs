//! # HybridPress-Huffman: Pure Rust Huffman Coding
//!
//! This crate builds optimal prefix codes for any finite stream of symbols
//! and packs the coded stream into bytes.
//!
//! ## Features
//!
//! - **Generic symbols**: anything `Copy + Ord + Debug` (`char`, `u8`, `u32`...)
//! - **Deterministic trees**: weight ties go to the older node, so equal
//!   inputs always give equal trees, code tables, and payloads
//! - **Arena tree**: nodes live in a flat `Vec` and refer to children by
//!   index, which serializes as-is
//! - **Packed payload**: MSB-first bytes plus an exact bit length
//! - **Strict decoding**: truncated or inconsistent input is an error, never a
//!   shorter output
//!
//! ## Example
//!
//! ```rust
//! use hybridpress_huffman::{compress, decompress};
//!
//! let symbols: Vec<char> = "abracadabra".chars().collect();
//!
//! let (bits, model) = compress(&symbols);
//! assert_eq!(bits.bit_len(), 23);
//! assert!(model.codes.is_prefix_free());
//!
//! let decoded = decompress(&bits, &model).unwrap();
//! assert_eq!(decoded, symbols);
//! ```
//!
//! ## Single-symbol alphabets
//!
//! An alphabet of one symbol has no tree. The symbol is coded as `0`, and the
//! decoder repeats it once per payload bit:
//!
//! ```rust
//! use hybridpress_huffman::compress;
//!
//! let (bits, model) = compress(&['a', 'a', 'a', 'a']);
//! assert_eq!(bits.to_bit_string(), "0000");
//! assert_eq!(bits.byte_len(), 1);
//! assert!(model.tree.is_none());
//! assert_eq!(model.codes.get(&'a'), Some("0"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod codes;
mod decoder;
mod encoder;
mod error;
mod frequency;
mod tree;

use std::fmt::Debug;

pub use bitstream_msb::{MsbBitReader, MsbBitWriter, PackedBits};
pub use codes::CodeTable;
pub use decoder::{HuffmanDecoder, decode};
pub use encoder::{HuffmanModel, encode, encode_with};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};

/// Anything that can be Huffman coded.
pub trait Symbol: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> Symbol for T {}

/// Encode `symbols` with a model built from their own frequencies.
///
/// This is equivalent to [`encode`].
pub fn compress<S: Symbol>(symbols: &[S]) -> (PackedBits, HuffmanModel<S>) {
    encode(symbols)
}

/// Decode a payload produced by [`compress`] or [`encode`].
pub fn decompress<S: Symbol>(bits: &PackedBits, model: &HuffmanModel<S>) -> Result<Vec<S>> {
    decode(bits, model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reencode_with_stored_table() {
        let symbols: Vec<char> = "0 1 2 3 256 257 97 98".chars().collect();
        let (bits, model) = compress(&symbols);
        assert_eq!(encode_with(&symbols, &model.codes).unwrap(), bits);
    }

    #[test]
    fn test_roundtrip_digits() {
        let symbols: Vec<char> = "97 98 99 256 258 257".chars().collect();
        let (bits, model) = compress(&symbols);
        assert_eq!(decompress(&bits, &model).unwrap(), symbols);
    }

    #[test]
    fn test_empty() {
        let (bits, model) = compress::<char>(&[]);
        assert_eq!(bits.byte_len(), 0);
        assert!(decompress(&bits, &model).unwrap().is_empty());
    }
}
