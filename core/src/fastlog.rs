//! fastlog.rs
//! End-to-end encode/decode: block stream -> container -> AES-GCM envelope.
//!
//! Wire layout of an encoded blob:
//!
//! ```text
//! [ nonce (12) ][ AES-256-GCM(container) || tag (16) ]
//! ```

use crate::config::FastLogConfig;
use crate::constants::{NONCE_LEN_12, TAG_LEN};
use crate::crypto::EnvelopeCipher;
use crate::stream::StreamCodec;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::FastLogError;

#[derive(Debug)]
pub struct FastLog {
    stream: StreamCodec,
    cipher: EnvelopeCipher,
    last: Option<TelemetrySnapshot>,
}

impl FastLog {
    pub fn new(config: &FastLogConfig, cipher: EnvelopeCipher) -> Result<Self, FastLogError> {
        Ok(Self { stream: StreamCodec::new(config)?, cipher, last: None })
    }

    pub fn cipher(&self) -> &EnvelopeCipher {
        &self.cipher
    }

    /// Telemetry of the most recent successful `encode` or `decode`.
    pub fn last_telemetry(&self) -> Option<&TelemetrySnapshot> {
        self.last.as_ref()
    }

    pub fn encode(&mut self, data: &[u8]) -> Result<Vec<u8>, FastLogError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        let container = self.stream.compress_stream(data, &mut counters, &mut timer)?;
        let (ciphertext, nonce) = timer.time(Stage::Encrypt, || self.cipher.seal(&container))?;
        counters.add_overhead(NONCE_LEN_12 + TAG_LEN);

        let mut blob = Vec::with_capacity(NONCE_LEN_12 + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        timer.finish();
        self.last = Some(TelemetrySnapshot::from(&counters, &timer));
        Ok(blob)
    }

    pub fn decode(&mut self, blob: &[u8]) -> Result<Vec<u8>, FastLogError> {
        if blob.len() < NONCE_LEN_12 {
            return Err(FastLogError::Validation(format!(
                "encoded blob of {} bytes is shorter than the {}-byte nonce",
                blob.len(),
                NONCE_LEN_12
            )));
        }

        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN_12);
        let container = timer.time(Stage::Decrypt, || self.cipher.open(ciphertext, nonce))?;
        counters.add_overhead(NONCE_LEN_12 + TAG_LEN);

        let data = self.stream.decompress_stream(&container, &mut counters, &mut timer)?;

        timer.finish();
        self.last = Some(TelemetrySnapshot::from(&counters, &timer));
        Ok(data)
    }
}
