//! hybrid/buffer.rs
//! Output buffer acquisition.
//!
//! Buffers are plain `Vec<u8>`: released by drop on every exit path, and
//! handed to the caller by value on success. Allocation goes through
//! `try_reserve_exact` so allocator failure surfaces as an error.

use crate::hybrid::types::{HybridError, Phase};
use crate::primitives::PrimitiveError;

/// Obtain a zeroed buffer of exactly `len` bytes.
pub(crate) fn acquire(len: usize, phase: Phase) -> Result<Vec<u8>, HybridError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| HybridError::Allocation { requested: len, phase })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Cut `buf` down to the `written` bytes a primitive reported.
///
/// A count larger than the buffer is a broken primitive; it is reported
/// instead of exposing zeroed tail bytes.
pub(crate) fn settle(
    mut buf: Vec<u8>,
    written: usize,
    codec: &'static str,
) -> Result<Vec<u8>, PrimitiveError> {
    if written > buf.len() {
        return Err(PrimitiveError::Overrun {
            codec,
            written,
            capacity: buf.len(),
        });
    }
    buf.truncate(written);
    Ok(buf)
}

/// A compressor that reports zero bytes written has failed.
#[inline]
pub(crate) fn nonzero(codec: &'static str, written: usize) -> Result<usize, PrimitiveError> {
    if written == 0 {
        Err(PrimitiveError::NoOutput { codec })
    } else {
        Ok(written)
    }
}
