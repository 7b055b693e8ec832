// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only client for the account endpoint.
//!
//! Used after a session is established to enrich the display name. Failures
//! are logged by the caller and never block authentication; display falls
//! back to the raw address.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::error::AuthError;

/// Profile data for a wallet address.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub balance: u64,
}

/// Client for the account endpoint.
#[derive(Debug, Clone)]
pub struct AccountClient {
    base_url: Url,
    client: reqwest::Client,
}

impl AccountClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetch the profile for an address.
    pub async fn fetch(&self, address: &str) -> Result<AccountProfile, AuthError> {
        let url = self
            .base_url
            .join(&format!("/api/chain/account/{address}"))
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Transport(format!(
                "HTTP {} from account endpoint",
                response.status()
            )));
        }

        response
            .json::<AccountProfile>()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
}
