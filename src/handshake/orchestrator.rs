// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! End-to-end sign-in orchestration.
//!
//! Drives the linear flow of one authentication attempt: wallet identity,
//! fresh nonce and timestamp, message composition, signature request, one
//! verification call, session establishment. Each step suspends until its
//! external call resolves; there is no internal parallelism and no automatic
//! retry. The caller owns re-entrancy (at most one attempt in flight).

use chrono::{SecondsFormat, Utc};
use url::Url;

use crate::siwe::{generate_nonce, SiweMessage};

use super::{
    account::AccountClient,
    error::AuthError,
    session::SessionHandle,
    verifier::VerifierClient,
    wallet::{WalletError, WalletProvider},
};

/// Static inputs for message composition.
#[derive(Debug, Clone)]
pub struct SiweSettings {
    /// Serving origin's host, e.g. `localhost:3000`.
    pub domain: String,
    /// Origin URI of the requesting application.
    pub uri: String,
    /// Free-text purpose line shown in the wallet prompt.
    pub statement: String,
}

/// Identity established by a successful handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Lowercase-normalized wallet address.
    pub address: String,
    /// Profile username, when the account endpoint knows one.
    pub display_name: Option<String>,
}

/// Handshake orchestrator over a wallet provider.
pub struct Handshake<W> {
    wallet: Option<W>,
    settings: SiweSettings,
    verifier: VerifierClient,
    accounts: AccountClient,
    session: SessionHandle,
}

impl<W: WalletProvider> Handshake<W> {
    /// Build an orchestrator talking to the gateway at `backend_url`.
    ///
    /// `wallet` is `None` when no signing provider is present in the
    /// environment; [`authenticate`](Self::authenticate) then fails with
    /// [`AuthError::NoWallet`] without touching the network.
    pub fn new(settings: SiweSettings, backend_url: Url, wallet: Option<W>) -> Self {
        Self {
            wallet,
            settings,
            verifier: VerifierClient::new(backend_url.clone()),
            accounts: AccountClient::new(backend_url),
            session: SessionHandle::new(),
        }
    }

    /// Read-only handle to the session for consuming code.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Run one sign-in attempt end to end.
    ///
    /// A failed attempt never establishes a session; a retry is a fresh
    /// invocation and draws a fresh nonce.
    pub async fn authenticate(&self) -> Result<Identity, AuthError> {
        let wallet = self.wallet.as_ref().ok_or(AuthError::NoWallet)?;

        let address = wallet.address().to_string();
        let chain_id = wallet.chain_id();

        let nonce = generate_nonce();
        let issued_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let message = SiweMessage::new(
            self.settings.domain.as_str(),
            address.as_str(),
            self.settings.statement.as_str(),
            self.settings.uri.as_str(),
            chain_id,
            nonce.as_str(),
            issued_at.as_str(),
        )?
        .to_string();

        let signature = wallet.sign_message(&message).await.map_err(|e| match e {
            WalletError::Rejected => AuthError::UserRejected,
            WalletError::Signer(detail) => AuthError::Transport(detail),
        })?;

        let acceptance = self.verifier.verify(&message, &signature).await?;

        let address = acceptance.address.unwrap_or(address).to_lowercase();
        let display_name = match self.accounts.fetch(&address).await {
            Ok(profile) => profile.username,
            Err(error) => {
                tracing::warn!(action = "profile_fetch_failed", address = %address, error = %error, "Falling back to the raw address");
                None
            }
        };

        self.session
            .establish(address.clone(), display_name.clone())
            .await;
        tracing::info!(action = "auth_success", address = %address, "Session established");

        Ok(Identity {
            address,
            display_name,
        })
    }

    /// Log out: notify the backend, then clear local state unconditionally.
    ///
    /// The goal is to stop presenting the user as authenticated locally, so a
    /// failed logout call never blocks the local clear.
    pub async fn logout(&self) {
        if let Err(error) = self.verifier.logout().await {
            tracing::warn!(action = "logout_notify_failed", error = %error, "Clearing local session anyway");
        }
        self.session.clear().await;
        tracing::info!(action = "logout", "Session cleared");
    }
}
