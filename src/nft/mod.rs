// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! NFT collaborator contract.
//!
//! NFT retrieval and staking mechanics live in the external game-logic
//! service; this module only defines the seam. Inputs are the owner address
//! (and NFT id for staking), outputs are the service's results passed
//! through unmodified, and failures surface as [`NftServiceError`] which the
//! handlers map to the generic 500 response.

pub mod http;

use async_trait::async_trait;

use crate::models::Nft;

pub use http::HttpNftService;

#[derive(Debug, thiserror::Error)]
pub enum NftServiceError {
    #[error("game-logic service unreachable: {0}")]
    Unreachable(String),

    #[error("game-logic service returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("unexpected response body: {0}")]
    BadResponse(String),
}

/// Collaborator contract for NFT retrieval and staking.
#[async_trait]
pub trait NftService: Send + Sync {
    /// Fetch all NFTs owned by `owner`.
    async fn nfts_for_owner(&self, owner: &str) -> Result<Vec<Nft>, NftServiceError>;

    /// Stake the NFT `nft_id` under `owner`.
    ///
    /// The result shape is defined by the game-logic service and returned
    /// to the client as-is.
    async fn stake(&self, owner: &str, nft_id: &str)
        -> Result<serde_json::Value, NftServiceError>;
}
