//! crypto/aead.rs
//! AES-256-GCM envelope around a finished container.
//!
//! Design notes:
//! - 32-byte key, fresh random 12-byte nonce per message.
//! - Tag verification must fail closed (no partial plaintext).
//! - No AAD: the envelope protects one opaque container blob.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

use crate::constants::{KEY_LEN_32, NONCE_LEN_12, TAG_LEN};
use crate::crypto::types::CryptoError;

#[derive(Clone)]
pub struct EnvelopeCipher {
    cipher: Aes256Gcm,
    key: [u8; KEY_LEN_32],
}

impl std::fmt::Debug for EnvelopeCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeCipher").field("key", &"<redacted>").finish()
    }
}

impl EnvelopeCipher {
    /// Cipher with a fresh random key.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN_32];
        rand::thread_rng().fill_bytes(&mut key);
        Self::from_array(key)
    }

    pub fn from_key(key: &[u8]) -> Result<Self, CryptoError> {
        let key: [u8; KEY_LEN_32] = key.try_into().map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        Ok(Self::from_array(key))
    }

    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(encoded.trim())?;
        Self::from_key(&raw)
    }

    fn from_array(key: [u8; KEY_LEN_32]) -> Self {
        Self { cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key)), key }
    }

    pub fn key_hex(&self) -> String {
        hex::encode(self.key)
    }

    /// Encrypt `plaintext` under a fresh nonce. Returns `(ciphertext || tag, nonce)`.
    pub fn seal(&self, plaintext: &[u8]) -> Result<(Vec<u8>, [u8; NONCE_LEN_12]), CryptoError> {
        let mut nonce = [0u8; NONCE_LEN_12];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;
        Ok((ciphertext, nonce))
    }

    /// Decrypt `ciphertext || tag` with `nonce`.
    pub fn open(&self, ciphertext_and_tag: &[u8], nonce: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if nonce.len() != NONCE_LEN_12 {
            return Err(CryptoError::InvalidNonceLen {
                expected: NONCE_LEN_12,
                actual: nonce.len(),
            });
        }
        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::Truncated { have: ciphertext_and_tag.len(), need: TAG_LEN });
        }

        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
            .map_err(|_| CryptoError::TagMismatch)
    }
}
