//! Hashing System - Email Digests
//!
//! Gravatar addresses images by a digest of the normalized email address.
//! MD5 is the historical scheme; SHA-256 is accepted by the service as well.

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::options::HashAlgorithm;

/// Trim surrounding whitespace and lower-case the address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Compute MD5 hash of bytes, return hex string
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the Gravatar hash of an email address.
///
/// The address is normalized first, so `" Foo@Example.com "` and
/// `"foo@example.com"` hash identically.
pub fn email_hash(email: &str, algorithm: HashAlgorithm) -> String {
    let normalized = normalize_email(email);
    match algorithm {
        HashAlgorithm::Md5 => md5_hex(normalized.as_bytes()),
        HashAlgorithm::Sha256 => sha256_hex(normalized.as_bytes()),
    }
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
