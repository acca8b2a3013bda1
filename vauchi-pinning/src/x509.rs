// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! X.509 Certificates
//!
//! DER certificate chains and public key export. Parsing is limited to what
//! key extraction needs; chain building, signatures, validity periods and
//! revocation are left to the TLS layer.

use std::fs;
use std::path::Path;

use rustls_pki_types::pem::PemObject;
use rustls_pki_types::CertificateDer;
use thiserror::Error;
use tracing::debug;
use x509_parser::prelude::*;

use crate::error::{PinningError, PinningResult};
use crate::hash::{key_hash, KeyHash};
use crate::trust::{CertificateSource, PublicKeyBytes, TrustEvaluator};

const PEM_ARMOR: &[u8] = b"-----BEGIN";

/// Errors loading a certificate chain.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("failed to read certificates: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid PEM: {0}")]
    Pem(String),
}

/// Exports public keys by parsing DER certificates.
#[derive(Debug, Clone, Copy, Default)]
pub struct X509TrustEvaluator;

impl<'a> TrustEvaluator<CertificateDer<'a>> for X509TrustEvaluator {
    fn public_key(&self, certificate: &CertificateDer<'a>) -> PinningResult<PublicKeyBytes> {
        export_public_key(certificate.as_ref())
    }
}

impl TrustEvaluator<[u8]> for X509TrustEvaluator {
    fn public_key(&self, certificate: &[u8]) -> PinningResult<PublicKeyBytes> {
        export_public_key(certificate)
    }
}

/// Exports the raw public key of a DER-encoded certificate.
///
/// The parsed certificate borrows `cert_der` and is dropped before this
/// returns, on success and on every error path.
pub fn export_public_key(cert_der: &[u8]) -> PinningResult<PublicKeyBytes> {
    let (_, certificate) = X509Certificate::from_der(cert_der).map_err(|err| {
        debug!(error = %err, "certificate could not be evaluated");
        PinningError::FailedToGetPublicKey
    })?;

    let key = &certificate.public_key().subject_public_key;
    if key.data.is_empty() || key.unused_bits != 0 {
        return Err(PinningError::FailedToGetDataFromPublicKey);
    }

    Ok(PublicKeyBytes::new(key.data.to_vec()))
}

/// Exports and hashes the public key of a DER-encoded certificate.
pub fn key_hash_of_certificate(cert_der: &[u8]) -> PinningResult<KeyHash> {
    let public_key = export_public_key(cert_der)?;
    Ok(key_hash(public_key.as_bytes()))
}

/// Returns the subject distinguished name, if the certificate parses.
pub fn certificate_subject(cert_der: &[u8]) -> Option<String> {
    X509Certificate::from_der(cert_der)
        .ok()
        .map(|(_, certificate)| certificate.subject().to_string())
}

/// A chain borrowed from a TLS handshake: the end entity followed by the
/// intermediates in the order the peer sent them.
#[derive(Debug, Clone, Copy)]
pub struct PresentedChain<'a> {
    end_entity: &'a CertificateDer<'a>,
    intermediates: &'a [CertificateDer<'a>],
}

impl<'a> PresentedChain<'a> {
    /// Borrows the certificates rustls passes to a server verifier.
    pub fn new(
        end_entity: &'a CertificateDer<'a>,
        intermediates: &'a [CertificateDer<'a>],
    ) -> Self {
        PresentedChain {
            end_entity,
            intermediates,
        }
    }
}

impl<'a> CertificateSource for PresentedChain<'a> {
    type Certificate = CertificateDer<'a>;

    fn certificate_count(&self) -> usize {
        1 + self.intermediates.len()
    }

    fn certificate_at(&self, index: usize) -> Option<&CertificateDer<'a>> {
        match index {
            0 => Some(self.end_entity),
            i => self.intermediates.get(i - 1),
        }
    }
}

/// An owned certificate chain, leaf first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<CertificateDer<'static>>,
}

impl CertificateChain {
    /// Creates a chain from DER certificates, leaf first.
    pub fn new(certificates: Vec<CertificateDer<'static>>) -> Self {
        CertificateChain { certificates }
    }

    /// Reads every `CERTIFICATE` block in `pem`, in order.
    ///
    /// Other PEM sections are ignored, so a file without certificates yields
    /// an empty chain.
    pub fn from_pem(pem: &[u8]) -> Result<Self, ChainError> {
        let certificates = CertificateDer::pem_slice_iter(pem)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ChainError::Pem(format!("{:?}", err)))?;
        Ok(CertificateChain { certificates })
    }

    /// Wraps a single DER certificate.
    pub fn from_der(der: &[u8]) -> Self {
        CertificateChain {
            certificates: vec![CertificateDer::from(der.to_vec())],
        }
    }

    /// Loads a chain from a PEM bundle or a single DER certificate.
    ///
    /// An empty file yields an empty chain.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let bytes = fs::read(path)?;
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        if bytes.windows(PEM_ARMOR.len()).any(|window| window == PEM_ARMOR) {
            Self::from_pem(&bytes)
        } else {
            Ok(Self::from_der(&bytes))
        }
    }

    /// The certificates in chain order.
    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certificates
    }

    /// Number of certificates in the chain.
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Returns true if the chain holds no certificates.
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl From<Vec<CertificateDer<'static>>> for CertificateChain {
    fn from(certificates: Vec<CertificateDer<'static>>) -> Self {
        CertificateChain { certificates }
    }
}

impl CertificateSource for CertificateChain {
    type Certificate = CertificateDer<'static>;

    fn certificate_count(&self) -> usize {
        self.certificates.len()
    }

    fn certificate_at(&self, index: usize) -> Option<&CertificateDer<'static>> {
        self.certificates.get(index)
    }
}
