// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! NFT route handlers.
//!
//! Thin pass-throughs: the authenticated principal comes from the request
//! extensions (set by the auth middleware), arguments travel to the
//! delegates untransformed, and any delegate failure maps to the generic
//! 500 response.

use axum::{extract::State, Extension, Json};

use crate::{
    error::ApiError,
    models::{BridgeRequest, Nft, Principal, StakeRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/nfts",
    tag = "NFTs",
    responses(
        (status = 200, description = "NFTs owned by the authenticated player", body = [Nft]),
        (status = 401, description = "Missing or invalid credential"),
        (status = 500, description = "Game-logic service failure")
    )
)]
pub async fn list_nfts(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<Nft>>, ApiError> {
    let nfts = state
        .nfts
        .nfts_for_owner(&principal.address.0)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(nfts))
}

#[utoipa::path(
    post,
    path = "/nfts/stake",
    tag = "NFTs",
    request_body = StakeRequest,
    responses(
        (status = 200, description = "Staking result from the game-logic service"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 500, description = "Game-logic service failure")
    )
)]
pub async fn stake_nft(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<StakeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .nfts
        .stake(&principal.address.0, &request.nft_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/nfts/bridge",
    tag = "NFTs",
    request_body = BridgeRequest,
    responses(
        (status = 200, description = "Transfer result from the bridge service"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 500, description = "Bridge service failure")
    )
)]
pub async fn bridge_nft(
    State(state): State<AppState>,
    Extension(_principal): Extension<Principal>,
    Json(request): Json<BridgeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .bridge
        .transfer(&request.nft_id, &request.destination_chain)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuiAddress;
    use crate::testing::{sample_nft, state_with, MockBridge, MockNftService, PLAYER_ADDRESS};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn principal() -> Principal {
        Principal {
            address: SuiAddress::from(PLAYER_ADDRESS),
        }
    }

    #[tokio::test]
    async fn list_nfts_returns_owner_nfts() {
        let nfts = Arc::new(MockNftService {
            nfts: vec![sample_nft()],
            ..Default::default()
        });
        let (state, _temp_dir) = state_with(nfts.clone(), Arc::new(MockBridge::default()));

        let Json(body) = list_nfts(State(state), Extension(principal()))
            .await
            .expect("listing succeeds");

        assert_eq!(body, vec![sample_nft()]);
        assert_eq!(
            nfts.list_calls.lock().unwrap().as_slice(),
            [PLAYER_ADDRESS.to_string()]
        );
    }

    #[tokio::test]
    async fn stake_passes_owner_and_nft_id_through_untransformed() {
        let nfts = Arc::new(MockNftService::default());
        let (state, _temp_dir) = state_with(nfts.clone(), Arc::new(MockBridge::default()));

        let Json(result) = stake_nft(
            State(state),
            Extension(principal()),
            Json(StakeRequest {
                nft_id: "  0xNFT-raw  ".into(),
            }),
        )
        .await
        .expect("staking succeeds");

        // Exactly (principal.address, nftId), no trimming or normalization.
        assert_eq!(
            nfts.stake_calls.lock().unwrap().as_slice(),
            [(PLAYER_ADDRESS.to_string(), "  0xNFT-raw  ".to_string())]
        );
        assert_eq!(result["staked"], "  0xNFT-raw  ");
    }

    #[tokio::test]
    async fn delegate_failure_maps_to_generic_500() {
        let nfts = Arc::new(MockNftService {
            fail: true,
            ..Default::default()
        });
        let (state, _temp_dir) = state_with(nfts, Arc::new(MockBridge::default()));

        let err = list_nfts(State(state), Extension(principal()))
            .await
            .expect_err("listing fails");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, crate::error::INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn bridge_passes_arguments_through() {
        let bridge = Arc::new(MockBridge::default());
        let (state, _temp_dir) = state_with(Arc::new(MockNftService::default()), bridge.clone());

        let Json(result) = bridge_nft(
            State(state),
            Extension(principal()),
            Json(BridgeRequest {
                nft_id: "0xnft".into(),
                destination_chain: "ethereum".into(),
            }),
        )
        .await
        .expect("bridging succeeds");

        assert_eq!(
            bridge.transfer_calls.lock().unwrap().as_slice(),
            [("0xnft".to_string(), "ethereum".to_string())]
        );
        assert_eq!(result["status"], "submitted");
    }
}
