//! LZW-specific error types.

use thiserror::Error;

/// LZW encoding/decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzwError {
    /// A code that is neither in the table nor the next code to be assigned.
    #[error("Unknown dictionary code {code} (next code to be assigned is {next_code})")]
    UnknownCode {
        /// The offending code.
        code: u32,
        /// The code the decoder would have assigned next.
        next_code: u32,
    },

    /// Dictionary limit smaller than the seed table.
    #[error("Invalid dictionary limit: {0} (must be at least 256)")]
    InvalidLimit(u32),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
