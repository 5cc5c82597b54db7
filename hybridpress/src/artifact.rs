//! The compressed artifact and its persisted form.
//!
//! An [`Artifact`] is everything one encode call produces. It is
//! self-describing: decoding needs nothing but the artifact itself.
//!
//! The JSON form is what collaborators store:
//!
//! ```json
//! {
//!   "version": 1,
//!   "payload": { "bytes": [...], "bit_len": 123 },
//!   "dictionary": { "limit": { "kind": "freeze", "max_codes": 4096 }, "entries": [...] },
//!   "model": { "tree": { "nodes": [...], "root": 12 }, "codes": { "codes": {...} } },
//!   "original_size": 42,
//!   "compressed_size": 16,
//!   "ratio": 2.625,
//!   "elapsed": { "secs": 0, "nanos": 81234 }
//! }
//! ```

use crate::error::{HybridError, Result};
use crate::render::SEPARATOR;
use hybridpress_huffman::{HuffmanModel, HuffmanNode, PackedBits};
use hybridpress_lzw::DictionarySnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{Read, Write};
use std::time::Duration;

/// Artifact format version written by this crate.
pub const ARTIFACT_VERSION: u32 = 1;

/// Output of one encode call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Format version.
    pub version: u32,
    /// Huffman-coded rendered code text.
    pub payload: PackedBits,
    /// Dictionary entries added while encoding, with the growth policy.
    pub dictionary: DictionarySnapshot,
    /// Huffman tree and code table over the rendered text.
    pub model: HuffmanModel<char>,
    /// UTF-8 byte length of the input text.
    pub original_size: u64,
    /// Payload size in bytes, `ceil(bit_len / 8)`.
    pub compressed_size: u64,
    /// `original_size / compressed_size`, or 0 when nothing was produced.
    pub ratio: f64,
    /// Wall-clock time of the encode pipeline.
    pub elapsed: Duration,
}

impl Artifact {
    /// Assemble an artifact, deriving the size fields from the payload.
    pub fn new(
        payload: PackedBits,
        dictionary: DictionarySnapshot,
        model: HuffmanModel<char>,
        original_size: u64,
        elapsed: Duration,
    ) -> Self {
        let compressed_size = payload.byte_len();
        Self {
            version: ARTIFACT_VERSION,
            payload,
            dictionary,
            model,
            original_size,
            compressed_size,
            ratio: compression_ratio(original_size, compressed_size),
            elapsed,
        }
    }

    /// Number of LZW codes the payload carries.
    ///
    /// Derived from the model without decoding: codes are separated by single
    /// spaces, so the count is one more than the separator's weight.
    pub fn code_count(&self) -> u64 {
        match &self.model.tree {
            Some(tree) => {
                let separators = tree
                    .nodes()
                    .iter()
                    .find_map(|node| match node {
                        HuffmanNode::Leaf { symbol, weight } if *symbol == SEPARATOR => {
                            Some(*weight)
                        }
                        _ => None,
                    })
                    .unwrap_or(0);
                separators + 1
            }
            // A one-symbol alphabet is a single token of repeated digits
            None if self.model.codes.is_empty() => 0,
            None => 1,
        }
    }

    /// Summary statistics for reporting.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            original_size: self.original_size,
            compressed_size: self.compressed_size,
            ratio: self.ratio,
            elapsed: self.elapsed,
            payload_bits: self.payload.bit_len(),
            code_count: self.code_count(),
            dictionary_entries: self.dictionary.added(),
            alphabet_size: self.model.alphabet_size(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an artifact from JSON.
    ///
    /// The version is checked before the rest of the document is interpreted.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Write pretty-printed JSON to `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read an artifact from a JSON stream.
    pub fn read_json<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));
        if version != ARTIFACT_VERSION {
            return Err(HybridError::UnsupportedVersion(version));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// `original / compressed`, 0 when nothing was produced.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if compressed_size == 0 {
        0.0
    } else {
        original_size as f64 / compressed_size as f64
    }
}

/// Numbers reported after a compression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Input size in bytes.
    pub original_size: u64,
    /// Payload size in bytes.
    pub compressed_size: u64,
    /// `original_size / compressed_size`.
    pub ratio: f64,
    /// Encode time.
    pub elapsed: Duration,
    /// Exact payload length in bits.
    pub payload_bits: u64,
    /// LZW codes emitted.
    pub code_count: u64,
    /// Dictionary entries added beyond the seed table.
    pub dictionary_entries: usize,
    /// Distinct characters in the rendered code text.
    pub alphabet_size: usize,
}

impl CompressionStats {
    /// Space saved relative to the input, in percent (negative on growth).
    pub fn space_savings(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            100.0 * (1.0 - self.compressed_size as f64 / self.original_size as f64)
        }
    }

    /// Encode time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
