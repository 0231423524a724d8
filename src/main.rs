// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! SuiQuest Backend - NFT service for the SuiQuest blockchain game.
//!
//! Boundary layer only: credential verification, NFT fetch/stake, and
//! cross-chain transfer are delegated to external services.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - zkLogin bearer authentication
//! - `nft` - game-logic service collaborator (NFT fetch/stake)
//! - `bridge` - cross-chain transfer collaborator
//! - `db` - process-wide embedded database handle

mod api;
mod auth;
mod bridge;
mod config;
mod db;
mod error;
mod models;
mod nft;
mod state;
#[cfg(test)]
mod testing;

#[cfg(not(test))]
use std::{env, net::SocketAddr, sync::Arc};

#[cfg(not(test))]
use api::router;
#[cfg(not(test))]
use auth::HttpZkLoginVerifier;
#[cfg(not(test))]
use bridge::HttpBridgeClient;
#[cfg(not(test))]
use config::*;
#[cfg(not(test))]
use nft::HttpNftService;
#[cfg(not(test))]
use state::AppState;

#[cfg(not(test))]
#[tokio::main]
async fn main() {
    init_tracing();

    // Fail-fast: the database must open before the listener is bound.
    let db = match db::connect() {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "database connection failed");
            std::process::exit(1);
        }
    };
    tracing::info!("database connected");

    let http = reqwest::Client::new();
    let verify_url = env::var(ZKLOGIN_VERIFY_URL_ENV)
        .unwrap_or_else(|_| DEFAULT_ZKLOGIN_VERIFY_URL.to_string());
    let nft_url =
        env::var(NFT_SERVICE_URL_ENV).unwrap_or_else(|_| DEFAULT_NFT_SERVICE_URL.to_string());
    let bridge_url = env::var(BRIDGE_SERVICE_URL_ENV)
        .unwrap_or_else(|_| DEFAULT_BRIDGE_SERVICE_URL.to_string());

    let state = AppState::new(
        db,
        Arc::new(HttpZkLoginVerifier::new(http.clone(), verify_url)),
        Arc::new(HttpNftService::new(http.clone(), nft_url)),
        Arc::new(HttpBridgeClient::new(http, bridge_url)),
    );
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, "SuiQuest backend listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Install the tracing subscriber. `LOG_FORMAT=json` selects the JSON
/// formatter; `RUST_LOG` controls the filter (default `info`).
#[cfg(not(test))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolve on SIGINT or SIGTERM for graceful shutdown.
#[cfg(not(test))]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
