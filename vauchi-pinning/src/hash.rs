// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Public Key Hashing
//!
//! Computes the comparable hash of an exported public key. The raw key bytes
//! are prefixed with an ASN.1 SubjectPublicKeyInfo header, digested with
//! SHA-256 and base64-encoded. For RSA-2048 keys the header plus the raw
//! PKCS#1 key is exactly the DER SubjectPublicKeyInfo, so the result equals
//! what `openssl pkey -pubin -outform der | openssl dgst -sha256 -binary |
//! base64` produces.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use ring::digest;

/// SubjectPublicKeyInfo prefix for RSA-2048 keys.
///
/// Existing pins were generated against these exact bytes; they must never
/// change.
pub const RSA_2048_SPKI_HEADER: [u8; 24] = [
    0x30, 0x82, 0x01, 0x22, 0x30, 0x0D, 0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01,
    0x01, 0x05, 0x00, 0x03, 0x82, 0x01, 0x0F, 0x00,
];

/// Key algorithm and size, used to select the SPKI header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum KeyAlgorithm {
    /// RSA with a 2048-bit modulus.
    #[default]
    Rsa2048,
}

impl KeyAlgorithm {
    /// Returns the ASN.1 header prepended to raw keys of this algorithm.
    pub fn spki_header(self) -> &'static [u8] {
        match self {
            KeyAlgorithm::Rsa2048 => &RSA_2048_SPKI_HEADER,
        }
    }
}

/// Base64-encoded SHA-256 digest of a header-prefixed public key.
///
/// Comparison is exact string equality. No case folding or padding
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyHash(String);

impl KeyHash {
    /// Returns the base64 string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the hash and returns the base64 string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for KeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hashes raw RSA-2048 public key bytes.
pub fn key_hash(public_key: &[u8]) -> KeyHash {
    key_hash_with(KeyAlgorithm::Rsa2048, public_key)
}

/// Hashes raw public key bytes using the header for `algorithm`.
pub fn key_hash_with(algorithm: KeyAlgorithm, public_key: &[u8]) -> KeyHash {
    let mut context = digest::Context::new(&digest::SHA256);
    context.update(algorithm.spki_header());
    context.update(public_key);
    let digest = context.finish();
    KeyHash(STANDARD.encode(digest.as_ref()))
}
