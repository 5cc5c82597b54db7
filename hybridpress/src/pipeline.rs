//! The two-stage encode/decode pipeline.

use crate::artifact::Artifact;
use crate::config::CodecConfig;
use crate::error::{HybridError, Result};
use crate::render::{parse_codes, render_codes};
use hybridpress_lzw::{LzwDecoder, LzwEncoder};
use std::time::Instant;
use tracing::debug;

/// LZW followed by Huffman, with a fixed configuration.
///
/// The codec holds no mutable state, so one instance can serve any number of
/// threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridCodec {
    config: CodecConfig,
}

impl HybridCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `text` into an artifact.
    ///
    /// Fails only when the configured dictionary limit is invalid.
    pub fn encode(&self, text: &str) -> Result<Artifact> {
        let start = Instant::now();

        let mut lzw = LzwEncoder::new(self.config.lzw)?;
        let encoded = lzw.encode(text.as_bytes());
        debug!(
            input_bytes = text.len(),
            codes = encoded.codes.len(),
            entries_added = encoded.dictionary.added(),
            "dictionary stage complete"
        );

        let rendered: Vec<char> = render_codes(&encoded.codes).chars().collect();
        let (payload, model) = hybridpress_huffman::encode(&rendered);
        debug!(
            symbols = rendered.len(),
            alphabet = model.alphabet_size(),
            bits = payload.bit_len(),
            "entropy stage complete"
        );

        let artifact = Artifact::new(
            payload,
            encoded.dictionary,
            model,
            text.len() as u64,
            start.elapsed(),
        );
        debug!(
            original_size = artifact.original_size,
            compressed_size = artifact.compressed_size,
            ratio = artifact.ratio,
            "encoded"
        );

        Ok(artifact)
    }

    /// Restore the text an artifact was produced from.
    ///
    /// The dictionary policy comes from the artifact, not from this codec's
    /// configuration.
    pub fn decode(&self, artifact: &Artifact) -> Result<String> {
        let rendered: String =
            hybridpress_huffman::decode(&artifact.payload, &artifact.model)?
                .into_iter()
                .collect();
        let codes = parse_codes(&rendered)?;
        debug!(
            symbols = rendered.len(),
            codes = codes.len(),
            "entropy stage decoded"
        );

        let mut lzw = LzwDecoder::new(artifact.dictionary.config())?;
        let (bytes, rebuilt) = lzw.decode_with_snapshot(&codes)?;
        debug!(
            output_bytes = bytes.len(),
            entries_rebuilt = rebuilt.added(),
            "dictionary stage decoded"
        );

        if self.config.verify_dictionary {
            if let Some(code) = rebuilt.first_difference(&artifact.dictionary) {
                return Err(HybridError::DictionaryMismatch { code });
            }
        }

        String::from_utf8(bytes).map_err(|e| HybridError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }
}
