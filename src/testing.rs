// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Test doubles for the external collaborators.
//!
//! Only compiled for tests. The mocks record the exact arguments they are
//! invoked with so tests can assert the pass-through contract (no
//! transformation between the HTTP surface and the delegates).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::auth::{AuthError, TokenVerifier};
use crate::bridge::{BridgeError, BridgeService};
use crate::models::{Nft, Principal, SuiAddress};
use crate::nft::{NftService, NftServiceError};
use crate::state::AppState;

/// Credential the mock verifier accepts.
pub const VALID_CREDENTIAL: &str = "valid-zk-credential";

/// Address of the principal behind [`VALID_CREDENTIAL`].
pub const PLAYER_ADDRESS: &str = "0xp1ayer";

pub struct MockVerifier;

#[async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify_token(&self, credential: &str) -> Result<Principal, AuthError> {
        if credential == VALID_CREDENTIAL {
            Ok(Principal {
                address: SuiAddress::from(PLAYER_ADDRESS),
            })
        } else {
            Err(AuthError::VerificationFailed("unknown credential".into()))
        }
    }
}

/// Mock game-logic service recording `(owner, nft_id)` stake calls.
#[derive(Default)]
pub struct MockNftService {
    /// NFTs returned for any owner.
    pub nfts: Vec<Nft>,
    /// When set, every call fails (exercises the 500 path).
    pub fail: bool,
    pub stake_calls: Mutex<Vec<(String, String)>>,
    pub list_calls: Mutex<Vec<String>>,
}

#[async_trait]
impl NftService for MockNftService {
    async fn nfts_for_owner(&self, owner: &str) -> Result<Vec<Nft>, NftServiceError> {
        self.list_calls.lock().unwrap().push(owner.to_string());
        if self.fail {
            return Err(NftServiceError::Unreachable("mock failure".into()));
        }
        Ok(self.nfts.clone())
    }

    async fn stake(
        &self,
        owner: &str,
        nft_id: &str,
    ) -> Result<serde_json::Value, NftServiceError> {
        self.stake_calls
            .lock()
            .unwrap()
            .push((owner.to_string(), nft_id.to_string()));
        if self.fail {
            return Err(NftServiceError::Unreachable("mock failure".into()));
        }
        Ok(serde_json::json!({ "staked": nft_id, "owner": owner }))
    }
}

/// Mock transfer service recording `(nft_id, destination_chain)` calls.
#[derive(Default)]
pub struct MockBridge {
    pub fail: bool,
    pub transfer_calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl BridgeService for MockBridge {
    async fn transfer(
        &self,
        nft_id: &str,
        destination_chain: &str,
    ) -> Result<serde_json::Value, BridgeError> {
        self.transfer_calls
            .lock()
            .unwrap()
            .push((nft_id.to_string(), destination_chain.to_string()));
        if self.fail {
            return Err(BridgeError::Unreachable("mock failure".into()));
        }
        Ok(serde_json::json!({ "status": "submitted" }))
    }
}

/// Sample NFT for list tests.
pub fn sample_nft() -> Nft {
    Nft {
        object_id: "0xnft1".into(),
        name: "Quest Sword".into(),
        description: Some("A starter sword".into()),
        image_url: None,
        collection: Some("suiquest-weapons".into()),
    }
}

/// Build an [`AppState`] over a temp database and the given mocks.
///
/// The returned [`TempDir`] must be kept alive for the duration of the test.
pub fn state_with(nfts: Arc<MockNftService>, bridge: Arc<MockBridge>) -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = crate::db::connect_path(temp_dir.path().join("test.redb"))
        .expect("Failed to open test database");
    let state = AppState::new(db, Arc::new(MockVerifier), nfts, bridge);
    (state, temp_dir)
}

/// Build an [`AppState`] with default mocks.
pub fn state() -> (AppState, TempDir) {
    state_with(
        Arc::new(MockNftService::default()),
        Arc::new(MockBridge::default()),
    )
}
