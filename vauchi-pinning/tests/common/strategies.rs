// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable strategies for property tests over mock chains.

#![allow(dead_code)]

use proptest::prelude::*;

/// Strategy for exported public keys (non-empty).
pub fn key_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..300)
}

/// Strategy for the keys of a non-empty chain, leaf first.
pub fn chain_keys_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..64), 1..8)
}

/// Strategy for well-formed base64 SHA-256 pins.
pub fn pin_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+/]{42}[AEIMQUYcgkosw048]="
}
