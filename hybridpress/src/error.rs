//! Error types for the hybrid codec.

use hybridpress_huffman::HuffmanError;
use hybridpress_lzw::LzwError;
use std::io;
use thiserror::Error;

/// Errors raised while encoding, decoding, or (de)serializing artifacts.
#[derive(Debug, Error)]
pub enum HybridError {
    /// Dictionary coder failure.
    #[error("LZW error: {0}")]
    Lzw(#[from] LzwError),

    /// Entropy coder failure.
    #[error("Huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// A rendered token that is not a decimal code.
    #[error("Invalid code token {token:?} at position {index}")]
    InvalidToken {
        /// Zero-based token position.
        index: usize,
        /// The offending text.
        token: String,
    },

    /// Decoded bytes are not UTF-8.
    #[error("Decoded text is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// The rebuilt dictionary disagrees with the stored snapshot.
    #[error("Dictionary mismatch at code {code}")]
    DictionaryMismatch {
        /// First code whose entry differs (or is missing on one side).
        code: u32,
    },

    /// Artifact written by an incompatible format version.
    #[error("Unsupported artifact version: {0}")]
    UnsupportedVersion(u32),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for hybrid codec operations.
pub type Result<T> = std::result::Result<T, HybridError>;

impl HybridError {
    /// Create an invalid token error.
    pub fn invalid_token(index: usize, token: impl Into<String>) -> Self {
        Self::InvalidToken {
            index,
            token: token.into(),
        }
    }
}
