// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pin Configuration
//!
//! JSON pin lists, as shipped with an application or passed to `vauchi-pin`:
//!
//! ```json
//! { "pinned_key_hashes": ["kZ/hOcxZy/MaaRzqOWMDOKu74d5u05oM4U2/j+UgkZk="] }
//! ```

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pins::PinSet;
use crate::validator::PinningValidator;

/// Length of a SHA-256 digest.
const DIGEST_LEN: usize = 32;

/// Errors loading a pin configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read pin config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pin config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pinned key hashes for one relay (or set of relays).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PinningConfig {
    /// Base64 SHA-256 hashes of header-prefixed public keys.
    #[serde(default)]
    pub pinned_key_hashes: Vec<String>,
}

impl PinningConfig {
    /// Creates a configuration from base64 pins.
    pub fn new(pinned_key_hashes: Vec<String>) -> Self {
        PinningConfig { pinned_key_hashes }
    }

    /// Parses a JSON pin configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON pin configuration from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Entries that are not base64 of a 32-byte digest.
    ///
    /// Such entries can never match. Validators accept them anyway; this is
    /// only used to warn whoever provisions the pins.
    pub fn malformed_pins(&self) -> Vec<&str> {
        self.pinned_key_hashes
            .iter()
            .map(String::as_str)
            .filter(|pin| !matches!(STANDARD.decode(pin), Ok(bytes) if bytes.len() == DIGEST_LEN))
            .collect()
    }

    /// The configured pins as a [`PinSet`].
    pub fn pin_set(&self) -> PinSet {
        PinSet::new(self.pinned_key_hashes.iter().cloned())
    }

    /// Builds a validator for DER certificates over the configured pins.
    pub fn into_validator(self) -> PinningValidator {
        PinningValidator::new(self.pinned_key_hashes)
    }
}
