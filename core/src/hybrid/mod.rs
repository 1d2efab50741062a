//! hybrid/mod.rs
//! Two-tier compression with two decompression sizing strategies.
//!
//! Notes:
//! - Compression always tries the primary first, then the fallback once.
//! - Legacy decompression guesses capacity (4x); block decompression is told
//!   the exact original size by the caller.
//! - Every call is stateless and owns its buffers; codecs are `Send + Sync`.

pub mod types;
pub mod buffer;
pub mod codec;

pub use types::*;
pub use codec::*;
