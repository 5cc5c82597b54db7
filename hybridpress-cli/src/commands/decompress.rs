//! Decompress command implementation.

use crate::config::CliConfig;
use hybridpress::{Artifact, HybridCodec};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::{info, warn};

/// Restore the text stored in `artifact_path`, to `output` or stdout.
pub fn cmd_decompress(
    artifact_path: &Path,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let artifact = Artifact::read_json(BufReader::new(File::open(artifact_path)?))?;
    let text = HybridCodec::new(config.codec).decode(&artifact)?;

    if text.len() as u64 != artifact.original_size {
        warn!(
            expected = artifact.original_size,
            actual = text.len(),
            "decoded size differs from recorded size"
        );
    }

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            info!(
                artifact = %artifact_path.display(),
                output = %path.display(),
                bytes = text.len(),
                "decompressed"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
