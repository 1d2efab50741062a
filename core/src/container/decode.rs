use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{MAGIC_FASTLOG2, MAX_BLOCK_SIZE};
use crate::container::types::{BlockHeader, BlockView, ContainerError, CONTAINER_HEADER_LEN};

/// Validate magic and return the declared block count.
#[inline]
pub fn parse_container_header(wire: &[u8]) -> Result<u64, ContainerError> {
    if wire.len() < CONTAINER_HEADER_LEN {
        return Err(ContainerError::Truncated { need: CONTAINER_HEADER_LEN, have: wire.len() });
    }

    let mut magic = [0u8; 8];
    magic.copy_from_slice(&wire[..8]);
    if magic != MAGIC_FASTLOG2 {
        return Err(ContainerError::InvalidMagic(magic));
    }

    Ok(LittleEndian::read_u64(&wire[8..16]))
}

#[inline]
fn parse_block_header(wire: &[u8]) -> BlockHeader {
    BlockHeader {
        block_size: LittleEndian::read_u32(&wire[0..4]),
        compressed_size: LittleEndian::read_u32(&wire[4..8]),
        level: LittleEndian::read_u32(&wire[8..12]),
    }
}

/// Decode a whole container into borrowed block views.
///
/// The declared block count is untrusted: nothing is preallocated from it,
/// and every header and payload is bounds-checked before slicing. Recorded
/// block sizes are capped at `MAX_BLOCK_SIZE` since decoders allocate them.
pub fn decode_container(wire: &[u8]) -> Result<Vec<BlockView<'_>>, ContainerError> {
    let block_count = parse_container_header(wire)?;
    let mut off = CONTAINER_HEADER_LEN;
    let mut blocks = Vec::new();

    for _ in 0..block_count {
        let need = off + BlockHeader::LEN;
        if wire.len() < need {
            return Err(ContainerError::Truncated { need, have: wire.len() });
        }
        let header = parse_block_header(&wire[off..need]);
        if header.block_size as usize > MAX_BLOCK_SIZE {
            return Err(ContainerError::BlockTooLarge { have: header.block_size as usize, max: MAX_BLOCK_SIZE });
        }
        off = need;

        let end = off + header.compressed_size as usize;
        if wire.len() < end {
            return Err(ContainerError::Truncated { need: end, have: wire.len() });
        }
        blocks.push(BlockView { header, payload: &wire[off..end] });
        off = end;
    }

    if off != wire.len() {
        return Err(ContainerError::TrailingBytes { count: wire.len() - off });
    }

    Ok(blocks)
}
