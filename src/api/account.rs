// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account profile endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    models::{AccountResponse, WalletAddress},
    state::AppState,
};

/// Look up the profile for a wallet address.
///
/// Unknown addresses are not an error: the response carries a zero balance
/// and no username, and the caller falls back to displaying the raw address.
#[utoipa::path(
    get,
    path = "/api/chain/account/{address}",
    params(("address" = String, Path, description = "Wallet address, any case")),
    tag = "Account",
    responses((status = 200, body = AccountResponse))
)]
pub async fn account(
    State(state): State<AppState>,
    Path(address): Path<WalletAddress>,
) -> Json<AccountResponse> {
    let store = state.store.read().await;
    match store.account(&address) {
        Some(record) => Json(AccountResponse {
            username: record.username,
            balance: record.balance,
        }),
        None => Json(AccountResponse {
            username: None,
            balance: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn seeded_state() -> AppState {
        let mut store = InMemoryStore::new();
        store.insert_account(
            WalletAddress::from("0x742d35cc6634c0532925a3b844bc9e7595f4ab12"),
            Some("wordsmith".to_string()),
            42,
        );
        AppState::new(store, "localhost:3000")
    }

    #[tokio::test]
    async fn known_address_returns_profile() {
        let response = account(
            State(seeded_state()),
            Path(WalletAddress::from("0x742d35cc6634c0532925a3b844bc9e7595f4ab12")),
        )
        .await
        .0;

        assert_eq!(response.username.as_deref(), Some("wordsmith"));
        assert_eq!(response.balance, 42);
    }

    #[tokio::test]
    async fn lookup_ignores_address_case() {
        let response = account(
            State(seeded_state()),
            Path(WalletAddress::from("0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12")),
        )
        .await
        .0;

        assert_eq!(response.username.as_deref(), Some("wordsmith"));
    }

    #[tokio::test]
    async fn unknown_address_returns_empty_profile() {
        let response = account(
            State(seeded_state()),
            Path(WalletAddress::from("0x0000000000000000000000000000000000000001")),
        )
        .await
        .0;

        assert!(response.username.is_none());
        assert_eq!(response.balance, 0);
    }
}
