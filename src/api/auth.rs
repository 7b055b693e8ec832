// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sign-in verification endpoints.

use std::str::FromStr;

use alloy::primitives::Signature;
use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{LogoutResponse, SiweAuthRequest, SiweAuthResponse, WalletAddress},
    siwe::{MessageError, SiweMessage},
    state::AppState,
};

/// Verify a signed sign-in message and mint a session.
///
/// Rejections: 400 when the message does not follow the canonical template
/// (the signature covers the literal byte sequence, so field order is
/// load-bearing); 401 for a foreign domain, a replayed nonce, or a signature
/// that does not recover to the claimed address.
#[utoipa::path(
    post,
    path = "/api/auth/siwe",
    request_body = SiweAuthRequest,
    tag = "Auth",
    responses(
        (status = 200, body = SiweAuthResponse),
        (status = 400, description = "Malformed sign-in message"),
        (status = 401, description = "Verification failed")
    )
)]
pub async fn siwe_auth(
    State(state): State<AppState>,
    Json(request): Json<SiweAuthRequest>,
) -> Result<Json<SiweAuthResponse>, ApiError> {
    let message: SiweMessage = request
        .message
        .parse()
        .map_err(|e: MessageError| ApiError::bad_request(e.to_string()))?;

    if message.domain.as_str() != &*state.siwe_domain {
        tracing::warn!(action = "auth_failed", reason = "domain_mismatch", domain = %message.domain, "Rejected sign-in for a foreign domain");
        return Err(ApiError::unauthorized(
            "Message domain does not match this service",
        ));
    }

    let signature = Signature::from_str(&request.signature)
        .map_err(|e| ApiError::unauthorized(format!("Invalid signature encoding: {e}")))?;

    let recovered = signature
        .recover_address_from_msg(request.message.as_bytes())
        .map_err(|_| ApiError::unauthorized("Invalid signature"))?;

    let claimed = WalletAddress::from(message.address.as_str());
    if WalletAddress::from(recovered.to_string()) != claimed {
        tracing::warn!(action = "auth_failed", reason = "signer_mismatch", address = %claimed, "Signature does not recover to the claimed address");
        return Err(ApiError::unauthorized("Invalid signature"));
    }

    let mut store = state.store.write().await;
    if !store.claim_nonce(&message.nonce) {
        tracing::warn!(action = "auth_failed", reason = "nonce_reuse", address = %claimed, "Replayed nonce");
        return Err(ApiError::unauthorized("Nonce has already been used"));
    }
    let session = store.create_session(claimed);
    drop(store);

    tracing::info!(action = "auth_success", address = %session.address, "Session established");

    Ok(Json(SiweAuthResponse {
        success: true,
        session_id: session.id,
        address: session.address.to_string(),
    }))
}

/// Acknowledge logout.
///
/// The client clears its local session regardless of this call's outcome, so
/// the endpoint always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses((status = 200, body = LogoutResponse))
)]
pub async fn logout() -> Json<LogoutResponse> {
    tracing::info!(action = "logout", "Logout acknowledged");
    Json(LogoutResponse { success: true })
}

/// Signature-less sign-in for local development. Trusts the caller-supplied
/// address outright; never part of a default build.
#[cfg(feature = "dev")]
pub async fn dev_auth(
    State(state): State<AppState>,
    Json(request): Json<crate::models::DevAuthRequest>,
) -> Result<Json<SiweAuthResponse>, ApiError> {
    let mut store = state.store.write().await;
    let session = store.create_session(request.address);
    drop(store);

    tracing::warn!(action = "dev_auth", address = %session.address, "Development bypass session established");

    Ok(Json(SiweAuthResponse {
        success: true,
        session_id: session.id,
        address: session.address.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handshake::{LocalWallet, WalletProvider};
    use crate::store::InMemoryStore;

    use axum::http::StatusCode;

    const DOMAIN: &str = "localhost:3000";

    fn state() -> AppState {
        AppState::new(InMemoryStore::new(), DOMAIN)
    }

    /// Compose and sign a valid request; returns the request and the
    /// lowercase signer address.
    async fn signed_request(wallet: &LocalWallet, domain: &str, nonce: &str) -> (SiweAuthRequest, String) {
        let address = wallet.address().to_string();
        let message = SiweMessage::new(
            domain,
            address.as_str(),
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            wallet.chain_id(),
            nonce,
            "2026-08-04T12:00:00.000Z",
        )
        .expect("valid message")
        .to_string();
        let signature = wallet.sign_message(&message).await.expect("signs");
        (SiweAuthRequest { message, signature }, address.to_lowercase())
    }

    #[tokio::test]
    async fn valid_signature_is_accepted() {
        let state = state();
        let wallet = LocalWallet::random(1);
        let (request, address) = signed_request(&wallet, DOMAIN, "fstpXq7m2NkL9wRd").await;

        let response = siwe_auth(State(state.clone()), Json(request))
            .await
            .expect("accepted")
            .0;

        assert!(response.success);
        assert_eq!(response.address, address);
        assert!(!response.session_id.is_empty());
        assert_eq!(state.store.read().await.session_count(), 1);
    }

    #[tokio::test]
    async fn single_character_mutation_is_rejected() {
        let state = state();
        let wallet = LocalWallet::random(1);
        let (mut request, _) = signed_request(&wallet, DOMAIN, "mutationNonce001").await;

        // Flip one character of the nonce inside the signed message.
        request.message = request.message.replace("mutationNonce001", "mutationNonce002");

        let error = siwe_auth(State(state.clone()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(state.store.read().await.session_count(), 0);
    }

    #[tokio::test]
    async fn reused_nonce_is_rejected() {
        let state = state();
        let wallet = LocalWallet::random(1);
        let (request, _) = signed_request(&wallet, DOMAIN, "replayedNonce123").await;

        siwe_auth(State(state.clone()), Json(request.clone()))
            .await
            .expect("first submission accepted");

        let error = siwe_auth(State(state.clone()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(state.store.read().await.session_count(), 1);
    }

    #[tokio::test]
    async fn foreign_domain_is_rejected() {
        let state = state();
        let wallet = LocalWallet::random(1);
        let (request, _) = signed_request(&wallet, "evil.example.com", "domainNonce12345").await;

        let error = siwe_auth(State(state.clone()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(state.store.read().await.session_count(), 0);
    }

    #[tokio::test]
    async fn signature_from_another_key_is_rejected() {
        let state = state();
        let signer = LocalWallet::random(1);
        let impostor = LocalWallet::random(1);

        // Message claims the impostor's address but is signed by `signer`.
        let address = impostor.address().to_string();
        let message = SiweMessage::new(
            DOMAIN,
            address.as_str(),
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            1,
            "impostorNonce999",
            "2026-08-04T12:00:00.000Z",
        )
        .unwrap()
        .to_string();
        let signature = signer.sign_message(&message).await.unwrap();

        let error = siwe_auth(State(state.clone()), Json(SiweAuthRequest { message, signature }))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn template_violation_is_bad_request() {
        let state = state();
        let error = siwe_auth(
            State(state),
            Json(SiweAuthRequest {
                message: "hello world".to_string(),
                signature: "0x00".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn zero_chain_id_is_bad_request() {
        let state = state();
        // Hand-built message; the composer itself refuses chain id 0.
        let message = "\
localhost:3000 wants you to sign in with your Ethereum account:
0x742d35cc6634c0532925a3b844bc9e7595f4ab12

Sign in to Digi-tionary

URI: http://localhost:3000
Version: 1
Chain ID: 0
Nonce: zeroChainNonce00
Issued At: 2026-08-04T12:00:00.000Z";

        let error = siwe_auth(
            State(state),
            Json(SiweAuthRequest {
                message: message.to_string(),
                signature: "0x00".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecodable_signature_is_rejected() {
        let state = state();
        let wallet = LocalWallet::random(1);
        let (mut request, _) = signed_request(&wallet, DOMAIN, "badSigNonce12345").await;
        request.signature = "0xnothex".to_string();

        let error = siwe_auth(State(state), Json(request)).await.unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_always_succeeds() {
        let response = logout().await.0;
        assert!(response.success);
    }

    #[cfg(feature = "dev")]
    #[tokio::test]
    async fn dev_bypass_trusts_the_supplied_address() {
        let state = state();
        let response = dev_auth(
            State(state.clone()),
            Json(crate::models::DevAuthRequest {
                address: WalletAddress::from("0xDevUser"),
            }),
        )
        .await
        .expect("dev session")
        .0;

        assert!(response.success);
        assert_eq!(response.address, "0xdevuser");
        assert_eq!(state.store.read().await.session_count(), 1);
    }
}
