// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use digitionary_auth::{
    api::router, config, models::WalletAddress, state::AppState, store::InMemoryStore,
};

#[tokio::main]
async fn main() {
    init_tracing();

    // Initialize application state
    let mut store = InMemoryStore::new();

    if let Ok(seed) = env::var(config::SEED_ACCOUNT_ENV) {
        if let Some((address, username)) = seed.split_once(':') {
            store.insert_account(WalletAddress::from(address), Some(username.to_string()), 0);
        }
    }

    let siwe_domain = env::var(config::SIWE_DOMAIN_ENV)
        .unwrap_or_else(|_| config::DEFAULT_SIWE_DOMAIN.to_string());
    let state = AppState::new(store, siwe_domain.as_str());
    let app = router(state);

    // Parse bind address
    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .unwrap_or(8000);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(action = "startup", %addr, siwe_domain = %siwe_domain, "Digi-tionary auth gateway listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let format = env::var(config::LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
}
