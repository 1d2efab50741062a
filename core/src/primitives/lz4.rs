//! primitives/lz4.rs
//! liblz4-backed primitives (via the `lz4` crate).
//!
//! - `Lz4Hc`   -> `LZ4_compress_HC` (primary)
//! - `Lz4Fast` -> `LZ4_compress_default` (fallback)
//! - `Lz4Safe` -> `LZ4_decompress_safe` (bounded decompressor)

use lz4::block::{self, CompressionMode};

use crate::constants::LZ4_MAX_INPUT_SIZE;
use crate::primitives::types::{BoundedDecompressor, FallbackCompressor, PrimaryCompressor, PrimitiveError};

/// Worst-case compressed size of an LZ4 block for `len` input bytes
/// (`LZ4_compressBound`). `None` when `len` exceeds what the format can carry.
pub fn worst_case_bound(len: usize) -> Option<usize> {
    if len > LZ4_MAX_INPUT_SIZE {
        return None;
    }
    block::compress_bound(len).ok()
}

/// LZ4 high-compression mode; `level` follows liblz4 HC semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Hc;

/// LZ4 default (fast) mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Fast;

/// `LZ4_decompress_safe`: never writes past the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Safe;

impl PrimaryCompressor for Lz4Hc {
    fn name(&self) -> &'static str {
        "lz4-hc"
    }

    fn compress(&self, input: &[u8], level: i32, dst: &mut [u8]) -> Result<usize, PrimitiveError> {
        block::compress_to_buffer(input, Some(CompressionMode::HIGHCOMPRESSION(level)), false, dst)
            .map_err(|e| PrimitiveError::Failed { codec: self.name(), msg: e.to_string() })
    }
}

impl FallbackCompressor for Lz4Fast {
    fn name(&self) -> &'static str {
        "lz4-fast"
    }

    fn compress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
        block::compress_to_buffer(input, Some(CompressionMode::DEFAULT), false, dst)
            .map_err(|e| PrimitiveError::Failed { codec: self.name(), msg: e.to_string() })
    }
}

impl BoundedDecompressor for Lz4Safe {
    fn name(&self) -> &'static str {
        "lz4-safe"
    }

    fn decompress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
        let capacity = i32::try_from(dst.len())
            .map_err(|_| PrimitiveError::CapacityTooLarge { codec: self.name(), capacity: dst.len() })?;

        block::decompress_to_buffer(input, Some(capacity), dst)
            .map_err(|e| PrimitiveError::Failed { codec: self.name(), msg: e.to_string() })
    }
}
