// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chain Validation
//!
//! Decides whether a presented certificate chain is trusted by comparing the
//! key hash of each certificate against the pin set.
//!
//! Scan policy, in chain order:
//! - an unavailable certificate handle is skipped;
//! - a certificate whose key cannot be exported aborts the whole scan;
//! - the first certificate whose key hash is pinned accepts the chain.
//!
//! An export failure is reported with its own kind even if a later
//! certificate would have matched.

use tracing::debug;

use crate::error::{PinningError, PinningResult};
use crate::hash::key_hash;
use crate::pins::PinSet;
use crate::trust::{AuthChallenge, CertificateSource, TrustEvaluator};
use crate::x509::X509TrustEvaluator;

/// How the TLS layer should answer the authentication challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Accept the server using the supplied credential.
    UseCredential,
    /// Abort the handshake.
    CancelAuthenticationChallenge,
}

impl Disposition {
    /// Returns true if the server was accepted.
    pub fn is_accepted(self) -> bool {
        matches!(self, Disposition::UseCredential)
    }
}

/// Credential derived from a trust context that passed pinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential<'t, T> {
    trust: &'t T,
}

impl<'t, T> Credential<'t, T> {
    /// The pinned trust context.
    pub fn trust(&self) -> &'t T {
        self.trust
    }
}

/// Validates server certificate chains against a fixed pin set.
///
/// Holds no mutable state, so one instance can serve concurrent handshakes.
#[derive(Debug, Clone)]
pub struct PinningValidator<E = X509TrustEvaluator> {
    pins: PinSet,
    evaluator: E,
}

impl PinningValidator<X509TrustEvaluator> {
    /// Creates a validator for DER certificates.
    ///
    /// Pins are not checked; malformed entries never match.
    pub fn new<I, S>(pinned_key_hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_evaluator(PinSet::new(pinned_key_hashes), X509TrustEvaluator)
    }
}

impl<E> PinningValidator<E> {
    /// Creates a validator that exports keys through `evaluator`.
    pub fn with_evaluator(pins: PinSet, evaluator: E) -> Self {
        PinningValidator { pins, evaluator }
    }

    /// The pins this validator matches against.
    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    /// Answers an authentication challenge.
    ///
    /// Every failure collapses into a cancelled challenge without a
    /// credential; the reason is not exposed.
    pub fn validate<'c, C>(
        &self,
        challenge: &'c C,
    ) -> (Disposition, Option<Credential<'c, C::Trust>>)
    where
        C: AuthChallenge,
        E: TrustEvaluator<<C::Trust as CertificateSource>::Certificate>,
    {
        match self.verify_trust(challenge.server_trust()) {
            Ok(trust) => (Disposition::UseCredential, Some(Credential { trust })),
            Err(err) => {
                debug!(reason = %err, "pinning validation failed");
                (Disposition::CancelAuthenticationChallenge, None)
            }
        }
    }

    /// Scans `trust` and returns it if any certificate's key is pinned.
    pub fn verify_trust<'t, T>(&self, trust: Option<&'t T>) -> PinningResult<&'t T>
    where
        T: CertificateSource,
        E: TrustEvaluator<T::Certificate>,
    {
        let trust = trust.ok_or(PinningError::NoCertificatesFromServer)?;

        let certificate_count = trust.certificate_count();
        if certificate_count == 0 {
            return Err(PinningError::NoCertificatesFromServer);
        }

        for index in 0..certificate_count {
            let Some(certificate) = trust.certificate_at(index) else {
                debug!(index, "certificate handle unavailable, skipping");
                continue;
            };

            let public_key = self.evaluator.public_key(certificate)?;
            let hash = key_hash(public_key.as_bytes());

            if self.pins.contains(&hash) {
                debug!(index, "pinned public key found in chain");
                return Ok(trust);
            }
        }

        Err(PinningError::ReceivedWrongCertificate)
    }
}
