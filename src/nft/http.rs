// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! HTTP-backed [`NftService`] delegating to the game-logic service.
//!
//! Endpoints consumed:
//! - `GET {base}/nfts/{owner}` → JSON array of NFTs
//! - `POST {base}/stake` with `{"owner": .., "nftId": ..}` → opaque result

use async_trait::async_trait;
use serde::Serialize;

use super::{NftService, NftServiceError};
use crate::models::Nft;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StakeCall<'a> {
    owner: &'a str,
    nft_id: &'a str,
}

/// Game-logic service client.
pub struct HttpNftService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNftService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, NftServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(NftServiceError::Upstream {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl NftService for HttpNftService {
    async fn nfts_for_owner(&self, owner: &str) -> Result<Vec<Nft>, NftServiceError> {
        let url = format!("{}/nfts/{owner}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NftServiceError::Unreachable(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| NftServiceError::BadResponse(e.to_string()))
    }

    async fn stake(
        &self,
        owner: &str,
        nft_id: &str,
    ) -> Result<serde_json::Value, NftServiceError> {
        let url = format!("{}/stake", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&StakeCall { owner, nft_id })
            .send()
            .await
            .map_err(|e| NftServiceError::Unreachable(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| NftServiceError::BadResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_call_serializes_camel_case() {
        let json = serde_json::to_string(&StakeCall {
            owner: "0xplayer",
            nft_id: "0xnft",
        })
        .unwrap();
        assert_eq!(json, r#"{"owner":"0xplayer","nftId":"0xnft"}"#);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let service = HttpNftService::new(reqwest::Client::new(), "http://game.local/");
        assert_eq!(service.base_url, "http://game.local");
    }
}
