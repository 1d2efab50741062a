//! Hex key files for the envelope cipher.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use fastlog_core::crypto::EnvelopeCipher;

pub fn default_key_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".key");
    PathBuf::from(name)
}

pub fn load(path: &Path) -> Result<EnvelopeCipher> {
    let encoded = fs::read_to_string(path).with_context(|| format!("reading key file {}", path.display()))?;
    EnvelopeCipher::from_hex(&encoded).with_context(|| format!("parsing key file {}", path.display()))
}

/// Read the key at `path`, or generate one and write it there.
pub fn load_or_create(path: &Path) -> Result<EnvelopeCipher> {
    if path.exists() {
        return load(path);
    }

    let cipher = EnvelopeCipher::generate();
    fs::write(path, cipher.key_hex() + "\n")
        .with_context(|| format!("writing key file {}", path.display()))?;
    log::info!("generated new key in {}", path.display());
    Ok(cipher)
}
