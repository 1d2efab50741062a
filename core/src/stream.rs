//! stream.rs
//! Fixed-size block stream on top of the hybrid codec.
//!
//! Design notes:
//! - Input is cut into `block_size` chunks; each chunk goes through the
//!   exact-size block API so decode never guesses capacity.
//! - Blocks are processed sequentially. Telemetry is collected per block.
//! - A failing block aborts the whole stream with its index attached.

use crate::config::{ConfigError, FastLogConfig};
use crate::container::{
    decode_container, encode_container, BlockHeader, BlockView, ContainerError,
    CONTAINER_HEADER_LEN,
};
use crate::hybrid::{Compressed, HybridCodec};
use crate::primitives::{
    BoundedDecompressor, FallbackCompressor, Lz4Fast, Lz4Hc, Lz4Safe, PrimaryCompressor,
};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::utils::{human_bytes, split_blocks};

#[derive(Debug, Clone)]
pub struct StreamCodec<P = Lz4Hc, F = Lz4Fast, D = Lz4Safe> {
    codec: HybridCodec<P, F, D>,
    level: i32,
    block_size: usize,
}

impl StreamCodec {
    /// liblz4-backed stream codec from a validated config.
    pub fn new(config: &FastLogConfig) -> Result<Self, ConfigError> {
        Self::with_codec(HybridCodec::new(Lz4Hc, Lz4Fast, Lz4Safe), config)
    }
}

impl<P, F, D> StreamCodec<P, F, D>
where
    P: PrimaryCompressor,
    F: FallbackCompressor,
    D: BoundedDecompressor,
{
    pub fn with_codec(codec: HybridCodec<P, F, D>, config: &FastLogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { codec, level: config.level, block_size: config.block_size })
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Compress `data` into a FASTLOGv2 container.
    pub fn compress_stream(
        &self,
        data: &[u8],
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>, ContainerError> {
        let mut blocks: Vec<(u32, Compressed)> = Vec::new();

        for (index, chunk) in split_blocks(data, self.block_size).enumerate() {
            let raw_len = u32::try_from(chunk.len())
                .map_err(|_| ContainerError::BlockTooLarge { have: chunk.len(), max: u32::MAX as usize })?;

            let compressed = timer
                .time(Stage::Compress, || self.codec.compress_block(chunk, self.level))
                .map_err(|source| ContainerError::Block { index: index as u64, source })?;

            if u32::try_from(compressed.len()).is_err() {
                return Err(ContainerError::BlockTooLarge { have: compressed.len(), max: u32::MAX as usize });
            }

            counters.add_compressed_block(chunk.len(), compressed.len(), compressed.path());
            counters.add_overhead(BlockHeader::LEN);
            blocks.push((raw_len, compressed));
        }

        // Level is validated to 1..=12, so the cast is lossless.
        let level = self.level as u32;
        let views: Vec<BlockView<'_>> = blocks
            .iter()
            .map(|(raw_len, compressed)| BlockView {
                header: BlockHeader {
                    block_size: *raw_len,
                    compressed_size: compressed.len() as u32,
                    level,
                },
                payload: compressed.as_bytes(),
            })
            .collect();

        let wire = timer.time(Stage::Frame, || encode_container(&views))?;
        counters.add_overhead(CONTAINER_HEADER_LEN);

        log::info!(
            "encoded {} into {} blocks ({} via fallback), container {}",
            human_bytes(data.len() as u64),
            views.len(),
            counters.blocks_fallback,
            human_bytes(wire.len() as u64)
        );
        Ok(wire)
    }

    /// Restore the original bytes from a FASTLOGv2 container.
    ///
    /// Every block except the last must restore exactly the length recorded in
    /// its header. The last block may come up short.
    pub fn decompress_stream(
        &self,
        wire: &[u8],
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>, ContainerError> {
        let blocks = timer.time(Stage::Frame, || decode_container(wire))?;
        counters.add_overhead(CONTAINER_HEADER_LEN);

        let last = blocks.len().saturating_sub(1);
        let mut out = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            let expected = block.header.block_size as usize;
            let restored = timer
                .time(Stage::Decompress, || self.codec.decompress_block(block.payload, expected))
                .map_err(|source| ContainerError::Block { index: index as u64, source })?;

            if index != last && restored.len() != expected {
                return Err(ContainerError::BlockLengthMismatch {
                    index: index as u64,
                    expected,
                    actual: restored.len(),
                });
            }

            counters.add_restored_block(restored.len(), block.payload.len());
            counters.add_overhead(BlockHeader::LEN);
            out.extend_from_slice(&restored);
        }

        log::info!(
            "decoded {} blocks into {}",
            blocks.len(),
            human_bytes(out.len() as u64)
        );
        Ok(out)
    }
}
