// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth,
    models::{BridgeRequest, MessageResponse, Nft, Principal, StakeRequest},
    state::AppState,
};

pub mod health;
pub mod nfts;

/// Assemble the full application router.
///
/// Pipeline order per request: CORS (permissive, all origins) → trace →
/// route dispatch; the `/nfts` subtree additionally passes through the
/// authentication middleware before its handlers run.
pub fn router(state: AppState) -> Router {
    let nft_routes = Router::new()
        .route("/", get(nfts::list_nfts))
        .route("/stake", post(nfts::stake_nft))
        .route("/bridge", post(nfts::bridge_nft))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authenticate,
        ))
        .with_state(state);

    Router::new()
        .route("/", get(health::root))
        .route("/api/nfts", get(health::nfts_placeholder))
        .nest("/nfts", nft_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::nfts_placeholder,
        nfts::list_nfts,
        nfts::stake_nft,
        nfts::bridge_nft
    ),
    components(schemas(MessageResponse, Nft, Principal, StakeRequest, BridgeRequest)),
    tags(
        (name = "Meta", description = "Service banner and legacy placeholder"),
        (name = "NFTs", description = "Player NFT listing, staking, and bridging")
    )
)]
struct ApiDoc;
