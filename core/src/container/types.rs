use thiserror::Error;

use crate::hybrid::HybridError;
use crate::utils::fmt_bytes;

/// magic (8) + block_count (8).
pub const CONTAINER_HEADER_LEN: usize = 8 + 8;

/// Per-block header. All fields are little-endian u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Original (uncompressed) length; the exact capacity used on decode.
    pub block_size: u32,
    /// Length of the compressed payload that follows.
    pub compressed_size: u32,
    /// Primary level requested when the block was written.
    pub level: u32,
}

impl BlockHeader {
    pub const LEN: usize = 4  // block_size
        + 4                   // compressed_size
        + 4;                  // level
}

/// Borrowed view of one block: header plus its compressed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockView<'a> {
    pub header: BlockHeader,
    pub payload: &'a [u8],
}

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("invalid container magic: {}", fmt_bytes(.0))]
    InvalidMagic([u8; 8]),

    #[error("truncated container: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("{count} trailing bytes after the last block")]
    TrailingBytes { count: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("block of {have} bytes exceeds the {max}-byte header limit")]
    BlockTooLarge { have: usize, max: usize },

    #[error("block {index} restored {actual} bytes, header says {expected}")]
    BlockLengthMismatch { index: u64, expected: usize, actual: usize },

    #[error("block {index}: {source}")]
    Block {
        index: u64,
        #[source]
        source: HybridError,
    },

    #[error("container write failed: {0}")]
    Io(#[from] std::io::Error),
}
