// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Certificate Fixtures
//!
//! A test root CA and a relay leaf it issued (both RSA-2048), plus a
//! self-signed EC P-256 leaf. The pins below were produced independently with
//!
//! ```text
//! openssl x509 -in cert.pem -pubkey -noout \
//!   | openssl pkey -pubin -outform der \
//!   | openssl dgst -sha256 -binary | base64
//! ```

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use vauchi_pinning::CertificateChain;

/// Pin of the relay leaf (`CN=relay.vauchi.test`).
pub const LEAF_PIN: &str = "kZ/hOcxZy/MaaRzqOWMDOKu74d5u05oM4U2/j+UgkZk=";

/// Pin of the test root CA.
pub const ROOT_PIN: &str = "8o7piIunFqGN6vcoYsryZu+vQLNZIjhPgzHmKMJ61Rg=";

/// SPKI pin of the EC leaf as openssl computes it.
pub const EC_LEAF_SPKI_PIN: &str = "9JvxyGh/+U25mOeloBoAppkSQZIg/y3XLsLT0wMC/hE=";

/// RSA-2048 header prepended to the EC point, then hashed.
pub const EC_LEAF_RSA_HEADER_HASH: &str = "GNHLsr1mt+FoJcNeHMG5DUBc/usfOyoMCi1uu5GtV68=";

/// Well-formed base64 that matches no key.
pub const UNRELATED_PIN: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Host name in the relay leaf's subjectAltName.
pub const RELAY_HOST: &str = "relay.vauchi.test";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_chain(name: &str) -> CertificateChain {
    CertificateChain::from_file(fixture_path(name)).expect("fixture chain should load")
}

/// Leaf followed by root, as the relay presents it.
pub fn relay_chain() -> CertificateChain {
    load_chain("relay_chain.pem")
}

pub fn leaf_der() -> Vec<u8> {
    std::fs::read(fixture_path("relay_leaf.der")).expect("fixture DER should load")
}
