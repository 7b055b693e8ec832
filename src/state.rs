// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config;
use crate::store::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    /// Serving domain that incoming sign-in messages must name.
    pub siwe_domain: Arc<str>,
}

impl AppState {
    pub fn new(store: InMemoryStore, siwe_domain: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            siwe_domain: siwe_domain.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryStore::new(), config::DEFAULT_SIWE_DOMAIN)
    }
}
