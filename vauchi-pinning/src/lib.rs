// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vauchi Pinning Library
//!
//! Public-key pinning for relay TLS connections. A server is trusted only if
//! one certificate in the chain it presents carries a pinned public key.
//! Pins are base64 SHA-256 hashes of the RSA-2048 SubjectPublicKeyInfo, the
//! same format common pinning tools produce.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vauchi_pinning::{pinned_client_config, PinnedServerVerifier, PinningValidator};
//!
//! let validator = PinningValidator::new(["kZ/hOcxZy/MaaRzqOWMDOKu74d5u05oM4U2/j+UgkZk="]);
//! let verifier = PinnedServerVerifier::new(Arc::new(validator));
//! let config = pinned_client_config(verifier)?;
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod mock;
pub mod pins;
pub mod trust;
pub mod validator;
#[cfg(feature = "rustls")]
pub mod verifier;
pub mod x509;

pub use config::{ConfigError, PinningConfig};
pub use error::{PinningError, PinningResult};
pub use hash::{key_hash, key_hash_with, KeyAlgorithm, KeyHash, RSA_2048_SPKI_HEADER};
pub use mock::{MockCertificate, MockEvaluator, MockTrust};
pub use pins::PinSet;
pub use trust::{
    AuthChallenge, CertificateSource, PublicKeyBytes, ServerTrustChallenge, TrustEvaluator,
};
pub use validator::{Credential, Disposition, PinningValidator};
#[cfg(feature = "rustls")]
pub use verifier::{
    pinned_client_config, platform_verifier, webpki_roots_verifier, PinnedServerVerifier,
};
pub use x509::{
    certificate_subject, export_public_key, key_hash_of_certificate, CertificateChain,
    ChainError, PresentedChain, X509TrustEvaluator,
};
