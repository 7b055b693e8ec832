// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Handshake Module
//!
//! The client half of the wallet sign-in round-trip.
//!
//! ## Auth Flow
//!
//! 1. [`Handshake::authenticate`] queries the wallet provider for the active
//!    identity and network
//! 2. Composes a canonical sign-in message with a fresh nonce and timestamp
//! 3. Requests an EIP-191 signature over the exact message bytes
//! 4. Submits `{message, signature}` to the verification endpoint
//! 5. On acceptance, establishes the local session and enriches the display
//!    name from the account endpoint (non-fatal)
//!
//! ## Guarantees
//!
//! - Exactly one verification call per attempt; no automatic retries
//! - Every failure surfaces as a typed [`AuthError`]; nothing is swallowed
//! - A fresh nonce per attempt; the caller retries by invoking
//!   [`Handshake::authenticate`] again
//! - The session holder has a single writer (the orchestrator); consuming
//!   code reads snapshots only
//!
//! [`Handshake::authenticate`]: orchestrator::Handshake::authenticate

pub mod account;
pub mod error;
pub mod orchestrator;
pub mod session;
pub mod verifier;
pub mod wallet;

pub use account::{AccountClient, AccountProfile};
pub use error::AuthError;
pub use orchestrator::{Handshake, Identity, SiweSettings};
pub use session::{Session, SessionHandle};
pub use verifier::VerifierClient;
pub use wallet::{LocalWallet, WalletError, WalletProvider};
