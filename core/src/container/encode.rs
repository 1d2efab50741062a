use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::MAGIC_FASTLOG2;
use crate::container::types::{BlockHeader, BlockView, ContainerError, CONTAINER_HEADER_LEN};

/// Encode blocks into a FASTLOGv2 container.
///
/// Layout:
///
/// ```text
/// [ magic "FASTLOG2" (8) ]
/// [ block_count (8) ]
/// repeated block_count times:
///   [ block_size (4) ]
///   [ compressed_size (4) ]
///   [ level (4) ]
///   [ compressed bytes (compressed_size) ]
/// ```
pub fn encode_container(blocks: &[BlockView<'_>]) -> Result<Vec<u8>, ContainerError> {
    let body: usize = blocks.iter().map(|b| BlockHeader::LEN + b.payload.len()).sum();
    let expected = CONTAINER_HEADER_LEN + body;
    let mut out = Vec::with_capacity(expected);

    // --- Header ---
    out.extend_from_slice(&MAGIC_FASTLOG2);
    out.write_u64::<LittleEndian>(blocks.len() as u64)?;

    // --- Blocks ---
    for block in blocks {
        if block.header.compressed_size as usize != block.payload.len() {
            return Err(ContainerError::LengthMismatch {
                expected: block.header.compressed_size as usize,
                actual: block.payload.len(),
            });
        }
        out.write_u32::<LittleEndian>(block.header.block_size)?;
        out.write_u32::<LittleEndian>(block.header.compressed_size)?;
        out.write_u32::<LittleEndian>(block.header.level)?;
        out.extend_from_slice(block.payload);
    }

    // --- Validation ---
    if out.len() != expected {
        return Err(ContainerError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }

    Ok(out)
}
