//! fastlog-core
//!
//! Hybrid LZ4 codec with a legacy full-buffer API and an exact-size block API,
//! plus the FASTLOGv2 block container and its AES-GCM envelope.
//! No FFI, no CLI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

// Codec core
pub mod primitives;
pub mod hybrid;
pub mod api;

// Stream layers
pub mod container;
pub mod stream;
pub mod crypto;
pub mod telemetry;
pub mod fastlog;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::FastLogConfig;
    pub use crate::fastlog::FastLog;
    pub use crate::hybrid::{Compressed, CompressionPath, HybridCodec, HybridError, Lz4Codec, Status};
    pub use crate::stream::StreamCodec;
    pub use crate::types::FastLogError;
}
