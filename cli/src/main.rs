//! fastlog command-line tool.
//!
//! Subcommands:
//! - `encode`: file -> compressed, encrypted FASTLOGv2 blob
//! - `decode`: blob -> original file
//! - `bench`: codec and end-to-end timings on one file

mod bench;
mod keys;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use fastlog_core::prelude::*;
use fastlog_core::utils::human_bytes;

#[derive(Debug, Parser)]
#[command(name = "fastlog", version, about = "Hybrid LZ4 log compression with an AES-GCM envelope")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compress and encrypt a file.
    Encode {
        input: PathBuf,
        output: PathBuf,
        /// LZ4 HC level for the primary compressor (1..=12).
        #[arg(long)]
        level: Option<i32>,
        /// Uncompressed bytes per block.
        #[arg(long)]
        block_size: Option<usize>,
        /// Hex key file; created with a fresh key when missing.
        /// Defaults to `<output>.key`.
        #[arg(long)]
        key_file: Option<PathBuf>,
        /// JSON config (`level`, `block_size`). Flags override it.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Decrypt and decompress a blob written by `encode`.
    Decode {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        key_file: PathBuf,
    },
    /// Time the codec and the full pipeline on one file.
    Bench {
        file: PathBuf,
        #[arg(long)]
        level: Option<i32>,
        #[arg(long)]
        block_size: Option<usize>,
        /// Emit the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    let _ = builder.try_init();
}

fn load_config(path: Option<&PathBuf>, level: Option<i32>, block_size: Option<usize>) -> Result<FastLogConfig> {
    let mut config = match path {
        Some(p) => FastLogConfig::from_json_file(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => FastLogConfig::default(),
    };
    if let Some(level) = level {
        config.level = level;
    }
    if let Some(block_size) = block_size {
        config.block_size = block_size;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn encode(
    input: PathBuf,
    output: PathBuf,
    level: Option<i32>,
    block_size: Option<usize>,
    key_file: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config.as_ref(), level, block_size)?;
    let key_file = key_file.unwrap_or_else(|| keys::default_key_path(&output));
    let cipher = keys::load_or_create(&key_file)?;

    let data = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let mut fastlog = FastLog::new(&config, cipher)?;
    let blob = fastlog.encode(&data).context("encoding failed")?;
    fs::write(&output, &blob).with_context(|| format!("writing {}", output.display()))?;

    if let Some(t) = fastlog.last_telemetry() {
        println!(
            "{} -> {} ({} blocks, {} via fallback, ratio {:.3})",
            human_bytes(t.bytes_raw),
            human_bytes(blob.len() as u64),
            t.blocks,
            t.blocks_fallback,
            t.compression_ratio
        );
    }
    println!("key: {}", key_file.display());
    Ok(())
}

fn decode(input: PathBuf, output: PathBuf, key_file: PathBuf) -> Result<()> {
    let cipher = keys::load(&key_file)?;
    let blob = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;

    let mut fastlog = FastLog::new(&FastLogConfig::default(), cipher)?;
    let data = fastlog.decode(&blob).context("decoding failed")?;
    fs::write(&output, &data).with_context(|| format!("writing {}", output.display()))?;

    println!("{} -> {}", human_bytes(blob.len() as u64), human_bytes(data.len() as u64));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Encode { input, output, level, block_size, key_file, config } => {
            encode(input, output, level, block_size, key_file, config)
        }
        Command::Decode { input, output, key_file } => decode(input, output, key_file),
        Command::Bench { file, level, block_size, json } => {
            let config = load_config(None, level, block_size)?;
            let data = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let report = bench::run(&data, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                bench::print_table(&file, &report);
            }
            Ok(())
        }
    }
}
