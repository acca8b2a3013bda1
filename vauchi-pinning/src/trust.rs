// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trust Abstractions
//!
//! Platform-agnostic interfaces to the TLS layer that owns the certificates.
//! The validator only needs to enumerate a chain and turn one certificate into
//! public key bytes, so a fake implementation is enough to exercise it
//! without a TLS stack.

use crate::error::PinningResult;

/// An ordered chain of certificates presented for one handshake.
///
/// Chain order is leaf first, issuers following.
pub trait CertificateSource {
    /// Certificate handle type.
    type Certificate: ?Sized;

    /// Number of certificates in the chain.
    fn certificate_count(&self) -> usize;

    /// Returns the certificate at `index`, or `None` if the handle is
    /// unavailable.
    fn certificate_at(&self, index: usize) -> Option<&Self::Certificate>;
}

/// Turns one certificate into its exported public key.
pub trait TrustEvaluator<C: ?Sized> {
    /// Exports the public key of `certificate`.
    ///
    /// Fails with `FailedToGetPublicKey` when the certificate cannot be
    /// evaluated and with `FailedToGetDataFromPublicKey` when the key cannot
    /// be exported.
    fn public_key(&self, certificate: &C) -> PinningResult<PublicKeyBytes>;
}

/// An authentication challenge raised by the TLS layer.
pub trait AuthChallenge {
    /// Trust context type.
    type Trust: CertificateSource;

    /// The server trust context, if the challenge carries one.
    fn server_trust(&self) -> Option<&Self::Trust>;
}

/// One certificate's public key in its raw exported form.
///
/// For RSA keys this is the PKCS#1 `RSAPublicKey` encoding (modulus and
/// exponent), without the SubjectPublicKeyInfo wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyBytes(Vec<u8>);

impl PublicKeyBytes {
    /// Wraps exported key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        PublicKeyBytes(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the key and returns its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for PublicKeyBytes {
    fn from(bytes: Vec<u8>) -> Self {
        PublicKeyBytes(bytes)
    }
}

impl From<&[u8]> for PublicKeyBytes {
    fn from(bytes: &[u8]) -> Self {
        PublicKeyBytes(bytes.to_vec())
    }
}

impl AsRef<[u8]> for PublicKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A challenge whose protection space may or may not carry a server trust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTrustChallenge<T> {
    server_trust: Option<T>,
}

impl<T> ServerTrustChallenge<T> {
    /// Creates a challenge carrying `trust`.
    pub fn new(trust: T) -> Self {
        ServerTrustChallenge {
            server_trust: Some(trust),
        }
    }

    /// Creates a challenge with no server trust.
    pub fn without_trust() -> Self {
        ServerTrustChallenge { server_trust: None }
    }
}

impl<T: CertificateSource> AuthChallenge for ServerTrustChallenge<T> {
    type Trust = T;

    fn server_trust(&self) -> Option<&T> {
        self.server_trust.as_ref()
    }
}
