// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Digi-tionary Auth Gateway - Wallet Sign-In Service
//!
//! This crate provides both halves of the Digi-tionary wallet sign-in
//! round-trip: the client-side handshake (message composition, wallet
//! signing, verification submission, session holding) and the verification
//! service the handshake talks to.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `handshake` - client-side sign-in orchestration
//! - `siwe` - canonical sign-in message and nonce generation
//! - `store` - in-memory sessions, consumed nonces, and account profiles

pub mod api;
pub mod config;
pub mod error;
pub mod handshake;
pub mod models;
pub mod siwe;
pub mod state;
pub mod store;
