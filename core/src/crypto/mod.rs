pub mod types;
pub mod aead;

pub use types::*;
pub use aead::*;
