// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Handshake errors.

use crate::siwe::MessageError;

/// Outcome taxonomy for a sign-in attempt.
///
/// Every failure of [`authenticate`] is one of these variants; the caller is
/// responsible for presenting the diagnostic, and the core guarantees it
/// always receives one.
///
/// [`authenticate`]: super::orchestrator::Handshake::authenticate
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No signing provider available in the environment. Terminal; the user
    /// must install or enable one.
    #[error("no wallet provider is available")]
    NoWallet,

    /// The user declined the signature prompt at the wallet level. Terminal
    /// for this attempt, not fatal to the application.
    #[error("the user rejected the signature request")]
    UserRejected,

    /// Network failure reaching the wallet provider or the verification
    /// endpoint.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint explicitly rejected the `{message, signature}` pair
    /// (bad signature, stale or reused nonce, domain mismatch).
    #[error("verification rejected (HTTP {status}): {detail}")]
    VerificationFailed { status: u16, detail: String },

    /// The composer received an invalid address, nonce, or chain id.
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl AuthError {
    /// Whether the caller may retry `authenticate()` with a fresh nonce.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AuthError::UserRejected | AuthError::Transport(_))
    }
}
