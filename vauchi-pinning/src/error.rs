// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pinning Error Types
//!
//! Reasons a single validation attempt can fail. All of them are terminal for
//! the handshake being validated; callers outside this crate only ever see a
//! rejected challenge.

use thiserror::Error;

/// Result type for pinning operations.
pub type PinningResult<T> = Result<T, PinningError>;

/// Why a presented certificate chain was not trusted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinningError {
    /// Trust context absent, or the chain has no certificates.
    #[error("no certificates from server")]
    NoCertificatesFromServer,

    /// The public key of a certificate could not be evaluated.
    #[error("failed to get public key")]
    FailedToGetPublicKey,

    /// The public key could not be exported to bytes.
    #[error("failed to get data from public key")]
    FailedToGetDataFromPublicKey,

    /// Every certificate was scanned and none matched a pin.
    #[error("received wrong certificate")]
    ReceivedWrongCertificate,
}
