//! HybridPress CLI - two-stage text compression
//!
//! Compresses UTF-8 text files into self-describing JSON artifacts
//! (LZW dictionary coding followed by Huffman entropy coding) and restores
//! them.

mod commands;
mod config;
mod utils;

use clap::{Parser, Subcommand};
use commands::{CompressOptions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use config::CliConfig;
use hybridpress::LzwConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hybridpress")]
#[command(
    author,
    version,
    about = "HybridPress - LZW + Huffman text compression"
)]
#[command(long_about = "
HybridPress compresses UTF-8 text in two stages: LZW dictionary coding,
then Huffman coding of the resulting code sequence. Each input becomes a
self-describing <name>.hpz.json artifact.

Examples:
  hybridpress compress notes.txt
  hybridpress compress *.txt -o artifacts/ --json
  hybridpress compress big.txt --unbounded-dictionary
  hybridpress decompress notes.txt.hpz.json -o notes.txt
  hybridpress info notes.txt.hpz.json
  hybridpress test artifacts/*.hpz.json
")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text files into artifacts
    #[command(alias = "c")]
    Compress {
        /// Text files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (defaults to each file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output a JSON report (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Let the dictionary grow without limit
        #[arg(long, conflicts_with = "max_dictionary")]
        unbounded_dictionary: bool,

        /// Freeze the dictionary at this many codes (at least 256)
        #[arg(long, value_name = "CODES")]
        max_dictionary: Option<u32>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Restore the text stored in an artifact
    #[command(alias = "d")]
    Decompress {
        /// Artifact to decompress
        artifact: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics stored in an artifact
    #[command(alias = "i")]
    Info {
        /// Artifact to inspect
        artifact: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify that artifacts decode
    #[command(alias = "t")]
    Test {
        /// Artifacts to test
        #[arg(required = true)]
        artifacts: Vec<PathBuf>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "hybridpress=debug,hybridpress_cli=debug"
    } else {
        "hybridpress=info,hybridpress_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Compress {
            files,
            output,
            json,
            unbounded_dictionary,
            max_dictionary,
            progress,
        } => {
            if unbounded_dictionary {
                config.codec.lzw = LzwConfig::UNBOUNDED;
            } else if let Some(max) = max_dictionary {
                let lzw = LzwConfig::new(max);
                lzw.validate()?;
                config.codec.lzw = lzw;
            }

            let options = CompressOptions {
                output_dir: output.as_deref(),
                json,
                progress,
            };
            cmd_compress(&files, &config, &options)
        }
        Commands::Decompress { artifact, output } => {
            cmd_decompress(&artifact, output.as_deref(), &config)
        }
        Commands::Info { artifact, json } => cmd_info(&artifact, json),
        Commands::Test {
            artifacts,
            progress,
        } => cmd_test(&artifacts, &config, progress),
    }
}
