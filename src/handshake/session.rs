// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Local session state.
//!
//! Replaces scattered global `is_authenticated` / `user_address` flags with
//! one explicit holder. The handshake orchestrator is the single writer;
//! consuming code clones the handle and reads snapshots.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Transient session state held by the caller.
///
/// Created only after a verifier accept; destroyed on explicit logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    /// Lowercase-normalized wallet address; empty while unauthenticated.
    pub address: String,
    /// Profile username when the account endpoint knows one.
    pub display_name: Option<String>,
}

/// Shared, clonable view of the session.
///
/// Writes are crate-internal so the orchestrator stays the only writer.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state, cloned.
    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.authenticated
    }

    pub(crate) async fn establish(&self, address: String, display_name: Option<String>) {
        let mut session = self.inner.write().await;
        *session = Session {
            authenticated: true,
            address,
            display_name,
        };
    }

    pub(crate) async fn clear(&self) {
        let mut session = self.inner.write().await;
        *session = Session::default();
    }
}
