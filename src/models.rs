// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Sui Address Type
//!
//! The [`SuiAddress`] newtype wraps Sui account addresses (0x-prefixed hex).
//! It provides type safety and clear semantics.
//!
//! Wire field names follow the upstream game clients (camelCase: `nftId`,
//! `destinationChain`, `imageUrl`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Sui Address Type
// =============================================================================

/// Sui account address wrapper.
///
/// Provides type safety for player addresses throughout the API.
/// Format: `0x` followed by up to 64 hexadecimal characters (32 bytes).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuiAddress(pub String);

impl std::fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SuiAddress {
    fn from(value: String) -> Self {
        SuiAddress(value)
    }
}

impl From<&str> for SuiAddress {
    fn from(value: &str) -> Self {
        SuiAddress(value.to_string())
    }
}

impl From<SuiAddress> for String {
    fn from(value: SuiAddress) -> Self {
        value.0
    }
}

// =============================================================================
// Principal
// =============================================================================

/// The authenticated identity attached to a request after credential
/// verification.
///
/// Created by the authentication middleware from a verified zkLogin
/// credential; lives for the duration of a single request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Principal {
    /// The player's Sui account address.
    pub address: SuiAddress,
}

// =============================================================================
// NFT Models
// =============================================================================

/// An NFT owned by a player, as reported by the game-logic service.
///
/// Field shape mirrors the Sui object display fields the service returns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    /// Sui object ID of the NFT.
    pub object_id: String,
    /// Display name.
    pub name: String,
    /// Display description, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display image URL, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Game collection the NFT belongs to, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

/// Request body for `POST /nfts/stake`.
///
/// The identifier is passed through to the staking delegate untransformed;
/// no presence-beyond-deserialization or ownership validation is applied here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    /// Sui object ID of the NFT to stake.
    pub nft_id: String,
}

/// Request body for `POST /nfts/bridge`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    /// Sui object ID of the NFT to bridge.
    pub nft_id: String,
    /// Destination chain identifier (passed through unvalidated).
    pub destination_chain: String,
}

// =============================================================================
// Meta Responses
// =============================================================================

/// Generic `{"message": ...}` response used by the banner and placeholder
/// routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
