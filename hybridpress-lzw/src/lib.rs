//! # HybridPress-LZW: Pure Rust LZW Dictionary Coding
//!
//! This crate turns a byte stream into a sequence of integer codes that
//! reference a dictionary built during the same pass, and back again.
//!
//! Unlike container formats such as TIFF or GIF, the codes are not packed
//! into a bit stream here. They are handed to the next stage of the
//! HybridPress pipeline as plain integers.
//!
//! ## Dictionary
//!
//! - **Seed table**: codes 0-255 map to the single bytes 0x00-0xFF
//! - **Growth**: one new entry per emitted code, numbered from 256 upwards
//! - **Limit**: [`DictionaryLimit::Freeze`] stops growth at a fixed size,
//!   [`DictionaryLimit::Unbounded`] never stops
//!
//! ## Example
//!
//! ```rust
//! use hybridpress_lzw::{compress, decompress, LzwConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let encoded = compress(original, LzwConfig::CAPPED).unwrap();
//! assert!(encoded.codes.len() < original.len());
//!
//! let decoded = decompress(&encoded.codes, LzwConfig::CAPPED).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use config::{DEFAULT_MAX_CODES, DictionaryLimit, LzwConfig, SEED_CODES};
pub use decoder::LzwDecoder;
pub use dictionary::{DictionarySnapshot, LzwDictionary};
pub use encoder::{Encoded, LzwEncoder};
pub use error::{LzwError, Result};

/// Encode data into LZW codes with the given configuration.
///
/// # Example
///
/// ```rust
/// use hybridpress_lzw::{compress, LzwConfig};
///
/// let encoded = compress(b"abcabcabc", LzwConfig::UNBOUNDED).unwrap();
/// assert_eq!(encoded.codes, vec![97, 98, 99, 256, 258, 257]);
/// assert_eq!(encoded.dictionary.entry(256), Some(&b"ab"[..]));
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Encoded> {
    let mut encoder = LzwEncoder::new(config)?;
    Ok(encoder.encode(data))
}

/// Decode LZW codes with the given configuration.
///
/// The configuration must carry the same [`DictionaryLimit`] the codes were
/// produced with.
///
/// # Example
///
/// ```rust
/// use hybridpress_lzw::{decompress, LzwConfig};
///
/// let decoded = decompress(&[97, 256, 97], LzwConfig::CAPPED).unwrap();
/// assert_eq!(decoded, b"aaaa");
/// ```
pub fn decompress(codes: &[u32], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(codes)
}
