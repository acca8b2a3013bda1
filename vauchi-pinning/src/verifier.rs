// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! rustls Integration
//!
//! A [`ServerCertVerifier`] that accepts a server only if its presented chain
//! passes pinning. The end entity and intermediates form the trust context,
//! in the order the server sent them.
//!
//! Every pinning failure is reported to rustls as the same opaque
//! `ApplicationVerificationFailure`, so the peer learns nothing about why it
//! was rejected.

use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::WebPkiServerVerifier;
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{
    CertificateError, ClientConfig, DigitallySignedStruct, Error as TlsError, RootCertStore,
    SignatureScheme,
};
use tracing::{debug, warn};

use crate::validator::PinningValidator;
use crate::x509::PresentedChain;

/// Pins server public keys during the rustls handshake.
#[derive(Debug)]
pub struct PinnedServerVerifier {
    validator: Arc<PinningValidator>,
    provider: Arc<CryptoProvider>,
    platform_verifier: Option<Arc<dyn ServerCertVerifier>>,
}

impl PinnedServerVerifier {
    /// Trusts the server on pinning alone.
    ///
    /// Handshake signatures are still checked against the presented end
    /// entity; names, validity periods and issuers are not.
    pub fn new(validator: Arc<PinningValidator>) -> Self {
        PinnedServerVerifier {
            validator,
            provider: Arc::new(rustls::crypto::ring::default_provider()),
            platform_verifier: None,
        }
    }

    /// Runs `platform_verifier` first, then pinning.
    pub fn with_platform_verifier(
        validator: Arc<PinningValidator>,
        platform_verifier: Arc<dyn ServerCertVerifier>,
    ) -> Self {
        PinnedServerVerifier {
            platform_verifier: Some(platform_verifier),
            ..Self::new(validator)
        }
    }

    /// The crypto provider used for handshake signatures.
    pub fn provider(&self) -> &Arc<CryptoProvider> {
        &self.provider
    }
}

impl ServerCertVerifier for PinnedServerVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, TlsError> {
        if let Some(platform) = &self.platform_verifier {
            platform.verify_server_cert(end_entity, intermediates, server_name, ocsp_response, now)?;
        }

        let chain = PresentedChain::new(end_entity, intermediates);
        match self.validator.verify_trust(Some(&chain)) {
            Ok(_) => {
                debug!(server = ?server_name, "certificate pinning passed");
                Ok(ServerCertVerified::assertion())
            }
            Err(err) => {
                warn!(server = ?server_name, "certificate pinning rejected server");
                debug!(reason = %err, "certificate pinning failure");
                Err(TlsError::InvalidCertificate(
                    CertificateError::ApplicationVerificationFailure,
                ))
            }
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}

/// Builds a webpki verifier over `roots`.
pub fn platform_verifier(roots: RootCertStore) -> Result<Arc<WebPkiServerVerifier>, TlsError> {
    WebPkiServerVerifier::builder_with_provider(
        Arc::new(roots),
        Arc::new(rustls::crypto::ring::default_provider()),
    )
    .build()
    .map_err(|err| TlsError::General(format!("failed to build platform verifier: {}", err)))
}

/// Builds a webpki verifier over the Mozilla root set.
pub fn webpki_roots_verifier() -> Result<Arc<WebPkiServerVerifier>, TlsError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    platform_verifier(root_store)
}

/// Builds a client config that authenticates servers with `verifier`.
pub fn pinned_client_config(verifier: PinnedServerVerifier) -> Result<ClientConfig, TlsError> {
    let provider = Arc::clone(verifier.provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();
    Ok(config)
}
