//! CLI configuration file.

use hybridpress::CodecConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Largest accepted input, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

/// Compression timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Settings loaded from `--config <FILE>`.
///
/// ```json
/// {
///   "max_input_bytes": 16777216,
///   "timeout_secs": 300,
///   "codec": { "lzw": { "limit": { "kind": "freeze", "max_codes": 4096 } } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Inputs larger than this are rejected before reading.
    pub max_input_bytes: u64,
    /// Per-file compression timeout; 0 disables it.
    pub timeout_secs: u64,
    /// Codec settings.
    pub codec: CodecConfig,
}

impl CliConfig {
    /// Load from a JSON file, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = File::open(path)
            .map_err(|e| format!("cannot open config {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
        config.codec.lzw.validate()?;
        Ok(config)
    }

    /// Compression timeout, if enabled.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            codec: CodecConfig::default(),
        }
    }
}
