// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{AccountResponse, LogoutResponse, SiweAuthRequest, SiweAuthResponse, WalletAddress},
    state::AppState,
};

pub mod account;
pub mod auth;
pub mod health;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/siwe", post(auth::siwe_auth))
        .route("/auth/logout", post(auth::logout))
        .route("/chain/account/{address}", get(account::account))
        .route("/health", get(health::health));

    #[cfg(feature = "dev")]
    let api_routes = api_routes.route("/auth/dev", post(auth::dev_auth));

    let api_routes = api_routes.with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::siwe_auth,
        auth::logout,
        account::account,
        health::health
    ),
    components(
        schemas(
            SiweAuthRequest,
            SiweAuthResponse,
            LogoutResponse,
            AccountResponse,
            WalletAddress
        )
    ),
    tags(
        (name = "Auth", description = "Wallet sign-in verification"),
        (name = "Account", description = "Account profile lookup"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;
