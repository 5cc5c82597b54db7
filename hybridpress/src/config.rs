//! Codec configuration.

use hybridpress_lzw::LzwConfig;
use serde::{Deserialize, Serialize};

/// Configuration for [`HybridCodec`](crate::HybridCodec).
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Dictionary coder settings used when encoding. Decoding always uses the
    /// policy stored in the artifact.
    pub lzw: LzwConfig,
    /// Compare the rebuilt dictionary against the artifact's snapshot on
    /// decode.
    pub verify_dictionary: bool,
}

impl CodecConfig {
    /// Defaults with an unbounded dictionary.
    pub const UNBOUNDED: Self = Self {
        lzw: LzwConfig::UNBOUNDED,
        verify_dictionary: true,
    };

    /// Set the dictionary coder settings.
    pub fn with_lzw(mut self, lzw: LzwConfig) -> Self {
        self.lzw = lzw;
        self
    }

    /// Enable or disable snapshot verification.
    pub fn with_verify_dictionary(mut self, verify: bool) -> Self {
        self.verify_dictionary = verify;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            lzw: LzwConfig::default(),
            verify_dictionary: true,
        }
    }
}
