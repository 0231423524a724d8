// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Shared application state.
//!
//! All handles are `Arc`-held and internally synchronized or immutable;
//! requests share them without any locking of their own.

use std::sync::Arc;

use redb::Database;

use crate::auth::TokenVerifier;
use crate::bridge::BridgeService;
use crate::nft::NftService;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide embedded database handle, opened once at startup.
    /// Carried for the game-logic repositories; nothing in the boundary
    /// layer reads it directly.
    #[allow(dead_code)]
    pub db: Arc<Database>,
    /// zkLogin credential verifier.
    pub verifier: Arc<dyn TokenVerifier>,
    /// Game-logic service (NFT fetch/stake).
    pub nfts: Arc<dyn NftService>,
    /// Cross-chain transfer service.
    pub bridge: Arc<dyn BridgeService>,
}

impl AppState {
    pub fn new(
        db: Database,
        verifier: Arc<dyn TokenVerifier>,
        nfts: Arc<dyn NftService>,
        bridge: Arc<dyn BridgeService>,
    ) -> Self {
        Self {
            db: Arc::new(db),
            verifier,
            nfts,
            bridge,
        }
    }
}
