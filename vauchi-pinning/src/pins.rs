// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pin Sets
//!
//! The allow-list of expected public key hashes.

use crate::hash::KeyHash;

/// Immutable, ordered list of pinned key hashes.
///
/// Entries are not validated: a malformed pin simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PinSet {
    pins: Vec<String>,
}

impl PinSet {
    /// Creates a pin set from base64-encoded key hashes.
    pub fn new<I, S>(pinned_key_hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PinSet {
            pins: pinned_key_hashes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `hash` is pinned.
    pub fn contains(&self, hash: &KeyHash) -> bool {
        self.pins.iter().any(|pin| pin == hash.as_str())
    }

    /// Returns the pins in the order they were supplied.
    pub fn as_slice(&self) -> &[String] {
        &self.pins
    }

    /// Number of pins, malformed entries included.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if nothing is pinned.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
