// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check Command
//!
//! Runs pinning validation over a certificate chain loaded from disk.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use vauchi_pinning::CertificateChain;

use crate::config::CliConfig;
use crate::display;

/// Validates the chain in `file`. Returns true if it was accepted.
pub fn run(file: &Path, config: &CliConfig) -> Result<bool> {
    let pins = config.pinning_config()?;

    for pin in pins.malformed_pins() {
        display::warning(&format!(
            "Pin {:?} is not a base64 SHA-256 digest and will never match",
            pin
        ));
    }
    if pins.pinned_key_hashes.is_empty() {
        display::warning("No pins configured; every chain will be rejected");
    }

    let chain = CertificateChain::from_file(file)
        .with_context(|| format!("Failed to load certificates from {:?}", file))?;
    debug!(certificates = chain.len(), pins = pins.pinned_key_hashes.len(), "checking chain");

    let validator = pins.into_validator();
    match validator.verify_trust(Some(&chain)) {
        Ok(_) => {
            display::success("accepted");
            Ok(true)
        }
        Err(err) => {
            display::error(&format!("rejected: {}", err));
            Ok(false)
        }
    }
}
