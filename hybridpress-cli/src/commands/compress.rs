//! Compress command implementation.

use crate::config::CliConfig;
use crate::utils::{
    InputError, artifact_path, create_progress_bar, encode_with_timeout, format_size,
    read_text_input,
};
use hybridpress::{Artifact, CompressionStats, HybridCodec};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Options for the compress command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressOptions<'a> {
    /// Directory for artifacts; defaults to each input's directory.
    pub output_dir: Option<&'a Path>,
    /// Print a JSON report instead of a table.
    pub json: bool,
    /// Show a progress bar.
    pub progress: bool,
}

/// Outcome for one input file.
#[derive(Debug, Serialize)]
struct FileReport {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<CompressionStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn cmd_compress(
    files: &[PathBuf],
    config: &CliConfig,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("no input files".into());
    }
    if let Some(dir) = options.output_dir {
        fs::create_dir_all(dir)?;
    }

    let codec = HybridCodec::new(config.codec);
    let pb = create_progress_bar(files.len() as u64, options.progress && !options.json);

    // Inputs share nothing, so each one is compressed on its own rayon task
    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|input| {
            let report = match compress_file(input, codec, config, options.output_dir) {
                Ok((path, stats)) => {
                    info!(
                        file = %input.display(),
                        original = stats.original_size,
                        compressed = stats.compressed_size,
                        ratio = stats.ratio,
                        "compressed"
                    );
                    FileReport {
                        input: input.display().to_string(),
                        artifact: Some(path.display().to_string()),
                        stats: Some(stats),
                        error: None,
                    }
                }
                Err(e) => {
                    warn!(file = %input.display(), error = %e, "compression failed");
                    FileReport {
                        input: input.display().to_string(),
                        artifact: None,
                        stats: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_and_clear();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_reports(&reports);
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, reports.len()).into());
    }

    Ok(())
}

fn compress_file(
    input: &Path,
    codec: HybridCodec,
    config: &CliConfig,
    output_dir: Option<&Path>,
) -> Result<(PathBuf, CompressionStats), InputError> {
    let text = read_text_input(input, config.max_input_bytes)?;
    let artifact = encode_with_timeout(codec, text, config.timeout())?;

    let path = artifact_path(input, output_dir);
    write_artifact(&artifact, &path)?;

    Ok((path, artifact.stats()))
}

/// Write `artifact` to a temporary file beside `path`, then rename it into
/// place. On any failure the temporary file is removed and `path` is left as
/// it was.
fn write_artifact(artifact: &Artifact, path: &Path) -> Result<(), InputError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(staged.as_file_mut());
    artifact.write_json(&mut writer)?;
    writer.flush()?;
    drop(writer);

    if path.exists() {
        debug!(artifact = %path.display(), "replacing existing artifact");
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn print_reports(reports: &[FileReport]) {
    println!(
        "{:>10} {:>10} {:>7} {:>8} {:>9}  File",
        "Original", "Packed", "Ratio", "Saved", "Time"
    );
    println!("{}", "-".repeat(64));

    for report in reports {
        match (&report.stats, &report.error) {
            (Some(stats), _) => println!(
                "{:>10} {:>10} {:>6.2}x {:>7.1}% {:>7.2}ms  {}",
                format_size(stats.original_size),
                format_size(stats.compressed_size),
                stats.ratio,
                stats.space_savings(),
                stats.elapsed_ms(),
                report.input
            ),
            (None, Some(error)) => println!("{:>48}  {} ({})", "FAILED", report.input, error),
            (None, None) => {}
        }
    }
}
