//! telemetry/counters.rs
//! Mutable counters used while encoding or decoding a block stream.
//!
//! Converted into an immutable `TelemetrySnapshot` once the stream is done.
use serde::{Deserialize, Serialize};

use crate::hybrid::CompressionPath;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub blocks: u64,
    /// Blocks whose primary compression failed and were written by the fallback.
    pub blocks_fallback: u64,
    pub bytes_raw: u64,
    pub bytes_compressed: u64,
    /// Container headers, block headers, nonce and AEAD tag.
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one compressed block.
    ///
    /// - `raw_len`: block length before compression
    /// - `comp_len`: compressed payload length
    /// - `path`: which compressor produced the payload
    pub fn add_compressed_block(&mut self, raw_len: usize, comp_len: usize, path: CompressionPath) {
        self.blocks += 1;
        if path == CompressionPath::Fallback {
            self.blocks_fallback += 1;
        }
        self.bytes_raw += raw_len as u64;
        self.bytes_compressed += comp_len as u64;
    }

    /// Record one restored block.
    pub fn add_restored_block(&mut self, raw_len: usize, comp_len: usize) {
        self.blocks += 1;
        self.bytes_raw += raw_len as u64;
        self.bytes_compressed += comp_len as u64;
    }

    /// Record structural bytes that are neither payload nor original data.
    pub fn add_overhead(&mut self, len: usize) {
        self.bytes_overhead += len as u64;
    }
}
