//! # HybridPress: Two-Stage Text Compression
//!
//! HybridPress compresses UTF-8 text in two stages:
//!
//! 1. **LZW** replaces repeated byte strings with dictionary codes
//! 2. **Huffman** codes the decimal rendering of those codes
//!
//! The result is an [`Artifact`]: the packed payload plus everything needed
//! to decode it (dictionary snapshot, Huffman tree and code table) and the
//! size statistics of the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use hybridpress::{compress, decompress};
//!
//! let text = "TOBEORNOTTOBEORTOBEORNOT";
//! let artifact = compress(text).unwrap();
//! assert_eq!(artifact.original_size, 24);
//! assert_eq!(artifact.compressed_size, artifact.payload.bit_len().div_ceil(8));
//!
//! let restored = decompress(&artifact).unwrap();
//! assert_eq!(restored, text);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use hybridpress::{CodecConfig, HybridCodec, LzwConfig};
//!
//! let codec = HybridCodec::new(CodecConfig::default().with_lzw(LzwConfig::UNBOUNDED));
//! let artifact = codec.encode("abcabcabc").unwrap();
//! assert_eq!(codec.decode(&artifact).unwrap(), "abcabcabc");
//! ```
//!
//! ## Persistence
//!
//! Artifacts serialize to JSON with [`Artifact::to_json`] and
//! [`Artifact::write_json`], and load back with [`Artifact::from_json`] and
//! [`Artifact::read_json`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;

pub use artifact::{ARTIFACT_VERSION, Artifact, CompressionStats, compression_ratio};
pub use config::CodecConfig;
pub use error::{HybridError, Result};
pub use pipeline::HybridCodec;

pub use hybridpress_lzw::{DictionaryLimit, DictionarySnapshot, LzwConfig};

/// Compress `text` with the default configuration.
pub fn compress(text: &str) -> Result<Artifact> {
    HybridCodec::default().encode(text)
}

/// Decompress an artifact with the default configuration.
pub fn decompress(artifact: &Artifact) -> Result<String> {
    HybridCodec::default().decode(artifact)
}
