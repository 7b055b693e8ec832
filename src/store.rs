// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory backing for the verification service.
//!
//! Three tables: established sessions, consumed nonces (replay defense), and
//! account profiles. All keyed by lowercase-normalized addresses or opaque
//! ids; no persistence.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::WalletAddress;

/// Profile data surfaced by the account endpoint.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub username: Option<String>,
    pub balance: u64,
}

/// An established sign-in session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: String,
    pub address: WalletAddress,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemoryStore {
    sessions: HashMap<String, SessionRecord>,
    used_nonces: HashSet<String>,
    accounts: HashMap<WalletAddress, AccountRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a nonce as consumed. Returns `false` when it was already used,
    /// which the verifier treats as a replay.
    pub fn claim_nonce(&mut self, nonce: &str) -> bool {
        self.used_nonces.insert(nonce.to_string())
    }

    /// Mint a session for a verified address.
    pub fn create_session(&mut self, address: WalletAddress) -> SessionRecord {
        let id = Uuid::new_v4().to_string();
        let session = SessionRecord {
            id: id.clone(),
            address,
            created_at: Utc::now(),
        };
        self.sessions.insert(id, session.clone());
        session
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn insert_account(
        &mut self,
        address: WalletAddress,
        username: Option<String>,
        balance: u64,
    ) {
        self.accounts
            .insert(address, AccountRecord { username, balance });
    }

    pub fn account(&self, address: &WalletAddress) -> Option<AccountRecord> {
        self.accounts.get(address).cloned()
    }
}
