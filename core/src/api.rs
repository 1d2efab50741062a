//! api.rs
//! The four-operation surface over the default liblz4 codec.
//!
//! These mirror the legacy and block entry points one to one. Callers that
//! need to swap primitives build their own [`HybridCodec`](crate::hybrid::HybridCodec).

use crate::hybrid::{Compressed, HybridError, Lz4Codec};

static CODEC: Lz4Codec = Lz4Codec::lz4();

/// Legacy compress. `threads` and `block_size` are accepted and unused.
pub fn compress(input: &[u8], level: i32, threads: i32, block_size: i32) -> Result<Vec<u8>, HybridError> {
    CODEC.compress_legacy(input, level, threads, block_size).map(Compressed::into_vec)
}

/// Legacy decompress with 4x heuristic capacity.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, HybridError> {
    CODEC.decompress_legacy(input)
}

/// Block compress.
pub fn compress_block(input: &[u8], level: i32) -> Result<Vec<u8>, HybridError> {
    CODEC.compress_block(input, level).map(Compressed::into_vec)
}

/// Block decompress into exactly `expected_size` bytes of capacity.
pub fn decompress_block(input: &[u8], expected_size: usize) -> Result<Vec<u8>, HybridError> {
    CODEC.decompress_block(input, expected_size)
}
