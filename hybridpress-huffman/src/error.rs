//! Huffman-specific error types.

use thiserror::Error;

/// Huffman encoding/decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// The bit stream or its model cannot be decoded.
    #[error("Corrupt stream at bit {bit_position}: {reason}")]
    CorruptStream {
        /// Bit position where decoding stopped.
        bit_position: u64,
        /// What was wrong.
        reason: &'static str,
    },

    /// A symbol has no entry in the code table used for encoding.
    #[error("No code for symbol {symbol}")]
    MissingCode {
        /// Debug rendering of the symbol.
        symbol: String,
    },
}

impl HuffmanError {
    /// Create a corrupt stream error.
    pub fn corrupt(bit_position: u64, reason: &'static str) -> Self {
        Self::CorruptStream {
            bit_position,
            reason,
        }
    }
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
