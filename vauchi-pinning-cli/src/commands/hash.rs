// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hash Command
//!
//! Prints the pin of every certificate in one or more files.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use vauchi_pinning::{certificate_subject, key_hash_of_certificate, CertificateChain};

use crate::display;

/// Prints pins for each certificate in `files`.
pub fn run(files: &[PathBuf]) -> Result<()> {
    let mut failures = 0;

    for file in files {
        let chain = CertificateChain::from_file(file)
            .with_context(|| format!("Failed to load certificates from {:?}", file))?;

        if files.len() > 1 {
            println!("{}", file.display());
        }
        if chain.is_empty() {
            display::warning(&format!("No certificates in {:?}", file));
            continue;
        }

        for (index, certificate) in chain.certificates().iter().enumerate() {
            match key_hash_of_certificate(certificate) {
                Ok(pin) => {
                    let subject = certificate_subject(certificate);
                    display::pin_line(index, pin.as_str(), subject.as_deref());
                }
                Err(err) => {
                    display::error(&format!("[{}] {}", index, err));
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        bail!("{} certificate(s) could not be hashed", failures);
    }
    Ok(())
}
