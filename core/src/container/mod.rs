//! Wire format for FASTLOGv2 block containers.
//!
//! Responsibilities:
//! - Define container and block headers
//! - Encode blocks into a canonical byte layout
//! - Decode containers with strict validation
//!
//! Non-responsibilities:
//! - Compression (blocks arrive already compressed)
//! - Cryptography
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    BlockHeader,
    BlockView,
    ContainerError,
    CONTAINER_HEADER_LEN,
};
pub use encode::encode_container;
pub use decode::{decode_container, parse_container_header};
