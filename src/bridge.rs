// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Cross-chain bridging via the external transfer service.
//!
//! Pure pass-through: the source chain is fixed to `sui`, the token id and
//! destination chain travel untransformed, and the external service's JSON
//! result is returned as-is. No retry, no destination validation, no
//! finality wait.

use async_trait::async_trait;
use serde_json::Value;

/// Fixed source chain for every transfer originating here.
pub const SOURCE_CHAIN: &str = "sui";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("transfer service unreachable: {0}")]
    Unreachable(String),

    #[error("transfer service returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("unexpected response body: {0}")]
    BadResponse(String),
}

/// Collaborator contract for cross-chain NFT transfer.
#[async_trait]
pub trait BridgeService: Send + Sync {
    /// Transfer `nft_id` from Sui to `destination_chain`.
    async fn transfer(&self, nft_id: &str, destination_chain: &str)
        -> Result<Value, BridgeError>;
}

/// Build the transfer payload sent to the external service.
fn transfer_payload(nft_id: &str, destination_chain: &str) -> Value {
    serde_json::json!({
        "tokenId": nft_id,
        "fromChain": SOURCE_CHAIN,
        "toChain": destination_chain,
    })
}

/// HTTP-backed transfer client posting to `{base}/transfer`.
pub struct HttpBridgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBridgeClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }
}

#[async_trait]
impl BridgeService for HttpBridgeClient {
    async fn transfer(
        &self,
        nft_id: &str,
        destination_chain: &str,
    ) -> Result<Value, BridgeError> {
        let url = format!("{}/transfer", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&transfer_payload(nft_id, destination_chain))
            .send()
            .await
            .map_err(|e| BridgeError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BridgeError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BridgeError::BadResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fixes_source_chain_to_sui() {
        let payload = transfer_payload("0xnft", "ethereum");
        assert_eq!(payload["fromChain"], "sui");
        assert_eq!(payload["tokenId"], "0xnft");
        assert_eq!(payload["toChain"], "ethereum");
    }

    #[test]
    fn payload_passes_identifiers_through_untransformed() {
        // No normalization, trimming, or validation of either field.
        let payload = transfer_payload("  0xABC  ", "Not A Chain");
        assert_eq!(payload["tokenId"], "  0xABC  ");
        assert_eq!(payload["toChain"], "Not A Chain");
    }
}
