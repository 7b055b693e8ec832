// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures for the gateway's REST surface. All
//! types derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! ## Wallet Address Type
//!
//! The [`WalletAddress`] newtype wraps Ethereum-style addresses (0x-prefixed,
//! 40 hex characters) and normalizes them to lowercase on construction, so
//! that every comparison and map lookup in the service is case-insensitive.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Wallet Address Type
// =============================================================================

/// Ethereum-compatible wallet address wrapper.
///
/// Normalized to lowercase on construction. Wallets hand out EIP-55
/// mixed-case forms; identity comparison in this service is
/// lowercase-invariant throughout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(value: String) -> Self {
        WalletAddress(value.to_lowercase())
    }
}

impl From<&str> for WalletAddress {
    fn from(value: &str) -> Self {
        WalletAddress(value.to_lowercase())
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

// =============================================================================
// Auth Models
// =============================================================================

/// Sign-in verification request: the signed message and its signature.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiweAuthRequest {
    /// The canonical sign-in message, exactly as signed.
    pub message: String,
    /// 0x-prefixed hex EIP-191 signature over the message bytes.
    pub signature: String,
}

/// Successful sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiweAuthResponse {
    pub success: bool,
    /// Opaque server-side session identifier.
    pub session_id: String,
    /// The verified wallet address, lowercase.
    pub address: String,
}

/// Logout acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Development-only sign-in request (no signature). Compiled only with the
/// `dev` feature.
#[cfg(feature = "dev")]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DevAuthRequest {
    pub address: WalletAddress,
}

// =============================================================================
// Account Models
// =============================================================================

/// Profile data for a wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// Profile username, when one has been registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// On-chain balance known to the gateway.
    pub balance: u64,
}
