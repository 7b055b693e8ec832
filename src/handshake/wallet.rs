// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet provider abstraction and the local key signer.
//!
//! The handshake never talks to a concrete wallet directly; it consumes the
//! [`WalletProvider`] capability set (active identity, active network,
//! message signing). [`LocalWallet`] is the in-process implementation over an
//! alloy private-key signer, used by the CLI-less demo and by tests in place
//! of a browser extension wallet.

use alloy::{
    primitives::Address,
    signers::{local::PrivateKeySigner, Signer},
};

/// Errors raised by a wallet provider.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The user declined the signature prompt.
    #[error("signature request rejected by the user")]
    Rejected,

    /// The signer failed for any other reason.
    #[error("signer failure: {0}")]
    Signer(String),
}

/// External wallet capability set consumed by the handshake.
pub trait WalletProvider {
    /// The active signing identity.
    fn address(&self) -> Address;

    /// The active network identifier.
    fn chain_id(&self) -> u64;

    /// Produce an EIP-191 personal-sign signature over the exact message
    /// bytes, returned as a 0x-prefixed hex string.
    fn sign_message(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, WalletError>> + Send;
}

/// In-process wallet over a secp256k1 private key.
#[derive(Debug, Clone)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl LocalWallet {
    pub fn new(signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self { signer, chain_id }
    }

    /// Create a wallet from a hex-encoded private key (with or without the
    /// `0x` prefix).
    pub fn from_hex_key(private_key_hex: &str, chain_id: u64) -> Result<Self, WalletError> {
        let key_bytes = alloy::hex::decode(private_key_hex)
            .map_err(|e| WalletError::Signer(format!("invalid private key hex: {e}")))?;
        let signer = PrivateKeySigner::from_slice(&key_bytes)
            .map_err(|e| WalletError::Signer(format!("invalid private key: {e}")))?;
        Ok(Self::new(signer, chain_id))
    }

    /// Create a wallet with a freshly generated key.
    pub fn random(chain_id: u64) -> Self {
        Self::new(PrivateKeySigner::random(), chain_id)
    }
}

impl WalletProvider for LocalWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| WalletError::Signer(e.to_string()))?;
        Ok(alloy::hex::encode_prefixed(signature.as_bytes()))
    }
}
