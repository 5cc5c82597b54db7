//! Info command implementation.

use crate::utils::format_size;
use hybridpress::{Artifact, CompressionStats, DictionaryLimit};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ArtifactInfoJson {
    artifact: String,
    version: u32,
    dictionary_limit: DictionaryLimit,
    stats: CompressionStats,
}

/// Print the statistics stored in an artifact without decoding it.
pub fn cmd_info(artifact_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let artifact = Artifact::read_json(BufReader::new(File::open(artifact_path)?))?;
    let stats = artifact.stats();

    if json {
        let output = ArtifactInfoJson {
            artifact: artifact_path.display().to_string(),
            version: artifact.version,
            dictionary_limit: artifact.dictionary.limit,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Artifact Information");
    println!("====================");
    println!("File: {}", artifact_path.display());
    println!("Format version: {}", artifact.version);
    println!();
    println!("Sizes:");
    println!(
        "  Original: {} ({} bytes)",
        format_size(stats.original_size),
        stats.original_size
    );
    println!(
        "  Compressed: {} ({} bits)",
        format_size(stats.compressed_size),
        stats.payload_bits
    );
    println!("  Ratio: {:.2}x", stats.ratio);
    println!("  Space savings: {:.1}%", stats.space_savings());
    println!("  Encode time: {:.3} ms", stats.elapsed_ms());
    println!();
    println!("Dictionary stage:");
    match artifact.dictionary.limit {
        DictionaryLimit::Unbounded => println!("  Limit: unbounded"),
        DictionaryLimit::Freeze(max) => println!("  Limit: frozen at {} codes", max),
    }
    println!("  Codes emitted: {}", stats.code_count);
    println!("  Entries added: {}", stats.dictionary_entries);
    println!();
    println!("Entropy stage:");
    println!("  Alphabet size: {}", stats.alphabet_size);
    println!(
        "  Longest code: {} bits",
        artifact.model.codes.max_code_len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_info_reads_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i.hpz.json");
        let artifact = hybridpress::compress("information").unwrap();
        fs::write(&path, artifact.to_json().unwrap()).unwrap();

        cmd_info(&path, false).unwrap();
        cmd_info(&path, true).unwrap();
    }

    #[test]
    fn test_info_rejects_future_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.hpz.json");
        fs::write(&path, "{\"version\": 99}").unwrap();

        let err = cmd_info(&path, false).unwrap_err();
        assert!(err.to_string().contains("Unsupported artifact version"));
    }
}
