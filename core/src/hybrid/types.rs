//! hybrid/types.rs
//! Status codes, codec errors and the compressed result type.

use std::fmt;

use num_enum::TryFromPrimitive;
use serde::Serialize;
use thiserror::Error;

use crate::primitives::PrimitiveError;
use crate::utils::enum_name_or_hex;

/// Wire-stable status codes (0..=3) for callers that want a flat code.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok            = 0,
    /// Compression aborted before the fallback could run (allocation, oversized input).
    ErrCompress   = 1,
    /// Primary and fallback both failed.
    ErrFallback   = 2,
    /// Decompression failed on either sizing path, or its buffer could not be allocated.
    ErrDecompress = 3,
}

impl Status {
    pub fn verify(raw: u8) -> Result<Self, StatusError> {
        Status::try_from_primitive(raw).map_err(|_| StatusError::Unknown { raw })
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Status of a finished codec call.
    pub fn of<T>(result: &Result<T, HybridError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok            => "ok",
            Status::ErrCompress   => "compress failed",
            Status::ErrFallback   => "primary and fallback failed",
            Status::ErrDecompress => "decompress failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("unknown status code: {}", enum_name_or_hex::<Status>(*raw))]
    Unknown { raw: u8 },
}

/// Which side of the codec a buffer was requested for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Compress,
    Decompress,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Compress   => "compression",
            Phase::Decompress => "decompression",
        })
    }
}

/// Terminal codec failures. A primary failure on its own is never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HybridError {
    /// The output buffer could not be obtained from the allocator.
    #[error("could not allocate {requested} bytes for {phase} output")]
    Allocation { requested: usize, phase: Phase },

    /// Input is longer than the LZ4 block format can represent.
    #[error("input of {len} bytes exceeds the LZ4 limit of {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    /// Primary failed, then the fallback failed too.
    #[error("both compressors failed (primary: {primary}; fallback: {fallback})")]
    BothFailed { primary: PrimitiveError, fallback: PrimitiveError },

    /// Overflow avoided, malformed stream or wrong expected size; indistinguishable here.
    #[error("decompression into {capacity} bytes failed: {reason}")]
    Decompress { capacity: usize, reason: PrimitiveError },
}

impl HybridError {
    pub fn status(&self) -> Status {
        match self {
            HybridError::Allocation { phase: Phase::Compress, .. } => Status::ErrCompress,
            HybridError::Allocation { phase: Phase::Decompress, .. } => Status::ErrDecompress,
            HybridError::InputTooLarge { .. } => Status::ErrCompress,
            HybridError::BothFailed { .. } => Status::ErrFallback,
            HybridError::Decompress { .. } => Status::ErrDecompress,
        }
    }
}

/// Which compressor produced an output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompressionPath {
    Primary,
    /// Primary failed and the fallback succeeded.
    Fallback,
}

/// Owned compressor output, already truncated to the bytes written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    data: Vec<u8>,
    path: CompressionPath,
}

impl Compressed {
    pub(crate) fn new(data: Vec<u8>, path: CompressionPath) -> Self {
        Self { data, path }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn path(&self) -> CompressionPath {
        self.path
    }

    pub fn used_fallback(&self) -> bool {
        self.path == CompressionPath::Fallback
    }

    pub fn status(&self) -> Status {
        Status::Ok
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for Compressed {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Compressed> for Vec<u8> {
    fn from(c: Compressed) -> Self {
        c.data
    }
}
