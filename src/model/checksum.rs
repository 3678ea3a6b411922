//! Model artifact checksum

use std::fs;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::inference::InferenceError;

/// SHA-256 of a file as lowercase hex
pub fn file_sha256(path: &Path) -> Result<String, InferenceError> {
    let mut file = fs::File::open(path)
        .map_err(|e| InferenceError::Io(format!("{}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)
            .map_err(|e| InferenceError::Io(e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compare the artifact against an expected hex digest (case-insensitive)
pub fn verify_checksum(path: &Path, expected: &str) -> Result<(), InferenceError> {
    let actual = file_sha256(path)?;

    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(InferenceError::ChecksumMismatch {
            expected: expected.trim().to_ascii_lowercase(),
            actual,
        });
    }

    Ok(())
}
