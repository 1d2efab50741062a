//! `fastlog bench`: one-shot timings of the codec APIs and the full pipeline.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use fastlog_core::api;
use fastlog_core::crypto::EnvelopeCipher;
use fastlog_core::prelude::*;
use fastlog_core::telemetry::TelemetrySnapshot;
use fastlog_core::utils::human_bytes;

#[derive(Debug, Serialize)]
pub struct Timing {
    pub ms: f64,
    pub mb_per_sec: f64,
}

impl Timing {
    fn measure<T>(raw_len: usize, f: impl FnOnce() -> T) -> (T, Self) {
        let start = Instant::now();
        let out = f();
        let secs = start.elapsed().as_secs_f64();
        let mb_per_sec = if secs > 0.0 { raw_len as f64 / secs / (1024.0 * 1024.0) } else { 0.0 };
        (out, Self { ms: secs * 1_000.0, mb_per_sec })
    }
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub input_bytes: usize,
    pub level: i32,
    pub block_size: usize,
    pub compressed_bytes: usize,
    pub ratio: f64,
    pub used_fallback: bool,
    pub compress: Timing,
    pub decompress: Timing,
    /// Status of a legacy (4x capacity) decompression of the same payload.
    pub legacy_status: Status,
    pub encoded_bytes: usize,
    pub encode: Timing,
    pub decode: Timing,
    pub telemetry: Option<TelemetrySnapshot>,
}

pub fn run(data: &[u8], config: &FastLogConfig) -> Result<BenchReport> {
    let codec = Lz4Codec::lz4();

    let (compressed, compress) = Timing::measure(data.len(), || codec.compress_block(data, config.level));
    let compressed = compressed.context("block compression failed")?;

    let (restored, decompress) =
        Timing::measure(data.len(), || codec.decompress_block(compressed.as_bytes(), data.len()));
    let restored = restored.context("block decompression failed")?;
    anyhow::ensure!(restored == data, "block round trip mismatch");

    let legacy_status = Status::of(&api::decompress(compressed.as_bytes()));

    let mut fastlog = FastLog::new(config, EnvelopeCipher::generate())?;
    let (blob, encode) = Timing::measure(data.len(), || fastlog.encode(data));
    let blob = blob.context("encode failed")?;
    let telemetry = fastlog.last_telemetry().cloned();

    let (decoded, decode) = Timing::measure(data.len(), || fastlog.decode(&blob));
    anyhow::ensure!(decoded.context("decode failed")? == data, "pipeline round trip mismatch");

    let ratio = if data.is_empty() { 0.0 } else { compressed.len() as f64 / data.len() as f64 };

    Ok(BenchReport {
        input_bytes: data.len(),
        level: config.level,
        block_size: config.block_size,
        compressed_bytes: compressed.len(),
        ratio,
        used_fallback: compressed.used_fallback(),
        compress,
        decompress,
        legacy_status,
        encoded_bytes: blob.len(),
        encode,
        decode,
        telemetry,
    })
}

pub fn print_table(file: &Path, r: &BenchReport) {
    println!("{}", file.display());
    println!("{:<22} {:>14}", "input", human_bytes(r.input_bytes as u64));
    println!("{:<22} {:>14}", "compressed (block)", human_bytes(r.compressed_bytes as u64));
    println!("{:<22} {:>14.3}", "ratio", r.ratio);
    println!("{:<22} {:>14}", "path", if r.used_fallback { "fallback" } else { "primary" });
    println!("{:<22} {:>14}", "legacy decompress", r.legacy_status.to_string());
    println!("{:<22} {:>14}", "encoded (envelope)", human_bytes(r.encoded_bytes as u64));
    println!();
    println!("{:<22} {:>10} {:>12}", "stage", "ms", "MB/s");
    for (name, t) in [
        ("compress_block", &r.compress),
        ("decompress_block", &r.decompress),
        ("encode", &r.encode),
        ("decode", &r.decode),
    ] {
        println!("{:<22} {:>10.3} {:>12.1}", name, t.ms, t.mb_per_sec);
    }
}
