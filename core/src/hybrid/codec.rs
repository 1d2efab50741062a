//! hybrid/codec.rs
//! The hybrid codec: primary -> fallback escalation, heuristic and exact
//! decompression sizing.

use crate::constants::{LEGACY_EXPANSION_FACTOR, LZ4_MAX_INPUT_SIZE};
use crate::hybrid::buffer::{acquire, nonzero, settle};
use crate::hybrid::types::{Compressed, CompressionPath, HybridError, Phase};
use crate::primitives::{
    worst_case_bound, BoundedDecompressor, FallbackCompressor, Lz4Fast, Lz4Hc, Lz4Safe,
    PrimaryCompressor,
};

/// Hybrid codec over three injectable primitives.
///
/// All primitives must speak the LZ4 block format: output buffers are sized
/// with the LZ4 worst-case bound.
#[derive(Debug, Clone, Default)]
pub struct HybridCodec<P, F, D> {
    primary: P,
    fallback: F,
    decompressor: D,
}

/// liblz4 HC primary, liblz4 default fallback, `LZ4_decompress_safe`.
pub type Lz4Codec = HybridCodec<Lz4Hc, Lz4Fast, Lz4Safe>;

impl Lz4Codec {
    pub const fn lz4() -> Self {
        Self { primary: Lz4Hc, fallback: Lz4Fast, decompressor: Lz4Safe }
    }
}

impl<P, F, D> HybridCodec<P, F, D>
where
    P: PrimaryCompressor,
    F: FallbackCompressor,
    D: BoundedDecompressor,
{
    pub fn new(primary: P, fallback: F, decompressor: D) -> Self {
        Self { primary, fallback, decompressor }
    }

    /// Legacy full-buffer compression.
    ///
    /// `threads` and `block_size` are accepted for compatibility and have no
    /// effect: there is no internal parallelism or block splitting.
    pub fn compress_legacy(
        &self,
        input: &[u8],
        level: i32,
        threads: i32,
        block_size: i32,
    ) -> Result<Compressed, HybridError> {
        log::trace!("legacy compress ignores threads={threads} block_size={block_size}");
        self.compress_hybrid(input, level)
    }

    /// Block compression. Same algorithm as [`compress_legacy`](Self::compress_legacy).
    pub fn compress_block(&self, input: &[u8], level: i32) -> Result<Compressed, HybridError> {
        self.compress_hybrid(input, level)
    }

    /// Legacy decompression with a guessed capacity of 4x the compressed length.
    ///
    /// Valid streams whose original size exceeds that guess fail here; use
    /// [`decompress_block`](Self::decompress_block) when the size is known.
    pub fn decompress_legacy(&self, input: &[u8]) -> Result<Vec<u8>, HybridError> {
        let capacity = input
            .len()
            .checked_mul(LEGACY_EXPANSION_FACTOR)
            .ok_or(HybridError::Allocation { requested: usize::MAX, phase: Phase::Decompress })?;
        self.decompress_bounded(input, capacity)
    }

    /// Block decompression into exactly `expected_size` bytes of capacity.
    ///
    /// `expected_size` comes from out-of-band metadata and is trusted. A
    /// corrupt stream and an undersized `expected_size` both fail with
    /// [`HybridError::Decompress`].
    pub fn decompress_block(&self, input: &[u8], expected_size: usize) -> Result<Vec<u8>, HybridError> {
        self.decompress_bounded(input, expected_size)
    }

    fn compress_hybrid(&self, input: &[u8], level: i32) -> Result<Compressed, HybridError> {
        let bound = worst_case_bound(input.len())
            .ok_or(HybridError::InputTooLarge { len: input.len(), max: LZ4_MAX_INPUT_SIZE })?;

        // Primary: its buffer is dropped before the fallback gets a fresh one.
        let primary_err = {
            let mut out = acquire(bound, Phase::Compress)?;
            let attempt = self
                .primary
                .compress(input, level, &mut out)
                .and_then(|written| nonzero(self.primary.name(), written))
                .and_then(|written| settle(out, written, self.primary.name()));
            match attempt {
                Ok(out) => return Ok(Compressed::new(out, CompressionPath::Primary)),
                Err(e) => e,
            }
        };

        log::debug!(
            "{} failed on {} bytes at level {}: {}; escalating to {}",
            self.primary.name(),
            input.len(),
            level,
            primary_err,
            self.fallback.name()
        );

        let mut out = acquire(bound, Phase::Compress)?;
        let attempt = self
            .fallback
            .compress(input, &mut out)
            .and_then(|written| nonzero(self.fallback.name(), written))
            .and_then(|written| settle(out, written, self.fallback.name()));

        match attempt {
            Ok(out) => Ok(Compressed::new(out, CompressionPath::Fallback)),
            Err(fallback_err) => {
                log::warn!("{} also failed: {}", self.fallback.name(), fallback_err);
                Err(HybridError::BothFailed { primary: primary_err, fallback: fallback_err })
            }
        }
    }

    fn decompress_bounded(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, HybridError> {
        let mut out = acquire(capacity, Phase::Decompress)?;

        self.decompressor
            .decompress(input, &mut out)
            .and_then(|written| settle(out, written, self.decompressor.name()))
            .map_err(|reason| {
                log::warn!(
                    "{} failed on {} bytes with capacity {}: {}",
                    self.decompressor.name(),
                    input.len(),
                    capacity,
                    reason
                );
                HybridError::Decompress { capacity, reason }
            })
    }
}
