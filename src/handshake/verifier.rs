// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Outbound client for the verification endpoint.
//!
//! One HTTP call per attempt: `POST /api/auth/siwe` with the
//! `{message, signature}` pair. A 2xx response establishes the attempt as
//! accepted; any other status is a typed rejection carrying the endpoint's
//! diagnostic body. A paired logout call notifies the session endpoint and is
//! treated as fire-and-forget by the caller.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::error::AuthError;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a successful verification response.
#[derive(Debug, Deserialize)]
pub struct VerifierAcceptance {
    /// Identity the endpoint resolved from the signature, when it returns one.
    #[serde(default)]
    pub address: Option<String>,
    /// Opaque server-side session identifier.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Client for the verification endpoint.
#[derive(Debug, Clone)]
pub struct VerifierClient {
    base_url: Url,
    client: reqwest::Client,
}

impl VerifierClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Transport(e.to_string()))
    }

    /// Submit `{message, signature}` for verification.
    pub async fn verify(
        &self,
        message: &str,
        signature: &str,
    ) -> Result<VerifierAcceptance, AuthError> {
        let url = self.endpoint("/api/auth/siwe")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "message": message, "signature": signature }))
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<VerifierAcceptance>()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(AuthError::VerificationFailed {
                status: status.as_u16(),
                detail,
            })
        }
    }

    /// Notify the session endpoint of logout. Callers treat failure as
    /// non-fatal; local state is cleared regardless.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let url = self.endpoint("/api/auth/logout")?;
        self.client
            .post(url)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(())
    }
}
