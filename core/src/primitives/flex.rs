//! primitives/flex.rs
//! Pure-Rust primitives backed by `lz4_flex` (raw LZ4 blocks, no size prefix).

use lz4_flex::block::{compress, compress_into, decompress_into, get_maximum_output_size};

use crate::primitives::types::{BoundedDecompressor, FallbackCompressor, PrimitiveError};

/// Fast fallback without the C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexFast;

/// Safe decoder without the C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexSafe;

impl FallbackCompressor for FlexFast {
    fn name(&self) -> &'static str {
        "lz4-flex"
    }

    fn compress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
        // lz4_flex sizes its worst case more generously than LZ4_compressBound.
        if dst.len() >= get_maximum_output_size(input.len()) {
            return compress_into(input, dst)
                .map_err(|e| PrimitiveError::Failed { codec: self.name(), msg: e.to_string() });
        }

        let packed = compress(input);
        if packed.len() > dst.len() {
            return Err(PrimitiveError::Failed {
                codec: self.name(),
                msg: format!("output of {} bytes does not fit {} bytes", packed.len(), dst.len()),
            });
        }
        dst[..packed.len()].copy_from_slice(&packed);
        Ok(packed.len())
    }
}

impl BoundedDecompressor for FlexSafe {
    fn name(&self) -> &'static str {
        "lz4-flex-safe"
    }

    fn decompress(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, PrimitiveError> {
        decompress_into(input, dst)
            .map_err(|e| PrimitiveError::Failed { codec: self.name(), msg: e.to_string() })
    }
}
