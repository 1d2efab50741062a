//! primitives/mod.rs
//! Compression primitives consumed by the hybrid codec.
//!
//! Design notes:
//! - Each capability is a strategy trait so codecs can be assembled from any
//!   backend (and tests can inject always-fail doubles).
//! - Every shipped backend speaks the raw LZ4 block format, so any compressor's
//!   output is readable by any decompressor.
//! - Primitives never allocate the destination; the caller owns and sizes it.

pub mod types;
pub mod lz4;
pub mod flex;

pub use types::*;
pub use lz4::*;
pub use flex::*;
