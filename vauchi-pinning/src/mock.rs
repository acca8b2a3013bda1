// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Trust Layer
//!
//! In-memory certificates and evaluator for exercising the validator without
//! a TLS stack. Each mock certificate carries its public key directly, or a
//! scripted export failure.

use crate::error::{PinningError, PinningResult};
use crate::trust::{CertificateSource, PublicKeyBytes, TrustEvaluator};

/// A scripted certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCertificate {
    /// Exports the given key bytes.
    Key(Vec<u8>),
    /// Fails evaluation (`FailedToGetPublicKey`).
    Unevaluable,
    /// Evaluates, but the key cannot be exported
    /// (`FailedToGetDataFromPublicKey`).
    KeyWithoutData,
}

impl MockCertificate {
    /// A certificate exporting `bytes`.
    pub fn key(bytes: &[u8]) -> Self {
        MockCertificate::Key(bytes.to_vec())
    }
}

/// A trust context over mock certificates.
///
/// Slots holding `None` report an unavailable certificate handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockTrust {
    slots: Vec<Option<MockCertificate>>,
}

impl MockTrust {
    /// Creates a chain where every handle is available.
    pub fn new(certificates: Vec<MockCertificate>) -> Self {
        MockTrust {
            slots: certificates.into_iter().map(Some).collect(),
        }
    }

    /// Creates a chain with explicit handle availability.
    pub fn with_slots(slots: Vec<Option<MockCertificate>>) -> Self {
        MockTrust { slots }
    }
}

impl CertificateSource for MockTrust {
    type Certificate = MockCertificate;

    fn certificate_count(&self) -> usize {
        self.slots.len()
    }

    fn certificate_at(&self, index: usize) -> Option<&MockCertificate> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

/// Evaluator for [`MockCertificate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEvaluator;

impl TrustEvaluator<MockCertificate> for MockEvaluator {
    fn public_key(&self, certificate: &MockCertificate) -> PinningResult<PublicKeyBytes> {
        match certificate {
            MockCertificate::Key(bytes) => Ok(PublicKeyBytes::from(bytes.as_slice())),
            MockCertificate::Unevaluable => Err(PinningError::FailedToGetPublicKey),
            MockCertificate::KeyWithoutData => Err(PinningError::FailedToGetDataFromPublicKey),
        }
    }
}
