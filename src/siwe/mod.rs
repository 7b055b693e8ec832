// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Sign-In Message Core
//!
//! Canonical Sign-In-With-Ethereum message handling for the Digi-tionary
//! gateway.
//!
//! ## Contents
//!
//! - [`message`] - the [`SiweMessage`] value object: field validation,
//!   canonical serialization, and the strict parse the verifier runs
//! - [`nonce`] - freshness token generation
//!
//! The serialized message is byte-for-byte reconstructible from its fields:
//! `Display` and `FromStr` are exact inverses, and the verifier rejects any
//! message whose fields do not appear in the canonical order, since the
//! signature covers the literal byte sequence.

pub mod message;
pub mod nonce;

pub use message::{MessageError, SiweMessage};
pub use nonce::generate_nonce;
