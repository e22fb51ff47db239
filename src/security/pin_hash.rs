// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! One-way salted hashing of transaction PINs.
//!
//! Stored format: `pbkdf2-sha256$<iterations>$<base64 salt>$<base64 hash>`.
//! The plaintext PIN never leaves this module.

use std::num::NonZeroU32;

use base64ct::{Base64, Encoding};
use ring::{
    pbkdf2,
    rand::{SecureRandom, SystemRandom},
};
use thiserror::Error;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Default work factor for production hashing.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("system randomness unavailable")]
    Randomness,
    #[error("iteration count must be non-zero")]
    InvalidIterations,
    #[error("stored PIN hash is malformed")]
    MalformedHash,
}

/// Hashes PINs for storage and checks PINs against stored hashes.
pub trait PinHasher: Send + Sync {
    fn hash(&self, pin: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong PIN; `Err` only if `stored` is unreadable.
    fn verify(&self, pin: &str, stored: &str) -> Result<bool, HashError>;
}

/// PBKDF2-HMAC-SHA256 with a random per-PIN salt.
pub struct Pbkdf2PinHasher {
    iterations: NonZeroU32,
    rng: SystemRandom,
}

impl Pbkdf2PinHasher {
    pub fn new(iterations: u32) -> Result<Self, HashError> {
        let iterations = NonZeroU32::new(iterations).ok_or(HashError::InvalidIterations)?;
        Ok(Self {
            iterations,
            rng: SystemRandom::new(),
        })
    }
}

impl PinHasher for Pbkdf2PinHasher {
    fn hash(&self, pin: &str) -> Result<String, HashError> {
        let mut salt = [0u8; SALT_LEN];
        self.rng.fill(&mut salt).map_err(|_| HashError::Randomness)?;

        let mut derived = [0u8; HASH_LEN];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            self.iterations,
            &salt,
            pin.as_bytes(),
            &mut derived,
        );

        Ok(format!(
            "{SCHEME}${}${}${}",
            self.iterations,
            Base64::encode_string(&salt),
            Base64::encode_string(&derived)
        ))
    }

    fn verify(&self, pin: &str, stored: &str) -> Result<bool, HashError> {
        let mut parts = stored.split('$');
        let (Some(SCHEME), Some(iterations), Some(salt), Some(hash), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(HashError::MalformedHash);
        };

        let iterations = iterations
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(HashError::MalformedHash)?;
        let salt = Base64::decode_vec(salt).map_err(|_| HashError::MalformedHash)?;
        let hash = Base64::decode_vec(hash).map_err(|_| HashError::MalformedHash)?;

        Ok(pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            pin.as_bytes(),
            &hash,
        )
        .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Pbkdf2PinHasher {
        Pbkdf2PinHasher::new(1_000).unwrap()
    }

    #[test]
    fn hash_verifies_and_hides_plaintext() {
        let hasher = hasher();
        let stored = hasher.hash("482913").unwrap();

        assert!(stored.starts_with("pbkdf2-sha256$1000$"));
        assert!(!stored.contains("482913"));
        assert!(hasher.verify("482913", &stored).unwrap());
        assert!(!hasher.verify("482910", &stored).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hasher = hasher();
        let first = hasher.hash("482913").unwrap();
        let second = hasher.hash("482913").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_honours_stored_iterations() {
        let stored = Pbkdf2PinHasher::new(2_000).unwrap().hash("048213").unwrap();
        assert!(hasher().verify("048213", &stored).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let hasher = hasher();
        for stored in ["", "482913", "bcrypt$10$abc$def", "pbkdf2-sha256$0$AA==$AA==", "pbkdf2-sha256$10$!!$AA=="] {
            assert!(
                matches!(hasher.verify("482913", stored), Err(HashError::MalformedHash)),
                "{stored:?}"
            );
        }
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(matches!(
            Pbkdf2PinHasher::new(0),
            Err(HashError::InvalidIterations)
        ));
    }
}
