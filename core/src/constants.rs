//! constants.rs
//! Stable wire constants and defaults shared by the codec, the container and the envelope.

/// Magic marker for the FASTLOGv2 block container.
pub const MAGIC_FASTLOG2: [u8; 8] = *b"FASTLOG2";

/// Default LZ4 HC level used by the stream encoder.
pub const DEFAULT_LEVEL: i32 = 9;

/// LZ4 HC level range accepted by configuration.
pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 12;

/// Legacy decompression guesses capacity as `compressed_len * LEGACY_EXPANSION_FACTOR`.
pub const LEGACY_EXPANSION_FACTOR: usize = 4;

/// Largest input the LZ4 block format can represent (`LZ4_MAX_INPUT_SIZE`).
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

/// Defaults when no block size is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024; // 1 MiB
/// Max block size sanity bound (64 MiB). Block headers carry sizes as u32.
pub const MAX_BLOCK_SIZE: usize = 64 * 1024 * 1024;

/// AES-256-GCM key length.
pub const KEY_LEN_32: usize = 32;
/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;
/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;
