// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Freshness token generation.
//!
//! A nonce is embedded in every sign-in message to prevent replay of a
//! previously captured signature. Each authentication attempt draws a fresh
//! one; reusing a nonce after a failed or successful attempt is forbidden.

use rand::Rng;

/// 62-symbol alphanumeric alphabet the nonce is drawn from.
const NONCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Nonce length in characters. 16 draws from 62 symbols gives a space of
/// roughly 2^95, large enough to make collision negligible.
pub const NONCE_LENGTH: usize = 16;

/// Generate a fresh random nonce.
pub fn generate_nonce() -> String {
    let mut rng = rand::rng();
    (0..NONCE_LENGTH)
        .map(|_| NONCE_ALPHABET[rng.random_range(0..NONCE_ALPHABET.len())] as char)
        .collect()
}
