// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

use axum::Json;

use crate::models::MessageResponse;

/// Banner message returned by the root route.
pub const BANNER: &str = "SuiQuest Backend Running!";

/// Placeholder message for the legacy `/api/nfts` route.
pub const NFTS_PLACEHOLDER: &str = "NFTs endpoint working!";

/// Root banner route. Doubles as the liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses((status = 200, description = "Service is running", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: BANNER.to_string(),
    })
}

/// Legacy placeholder route.
///
/// Kept alongside the real `/nfts` router on purpose: upstream clients still
/// probe this path, and the two route structures coexist until the clients
/// migrate (see DESIGN.md).
#[utoipa::path(
    get,
    path = "/api/nfts",
    tag = "Meta",
    responses((status = 200, description = "Placeholder", body = MessageResponse))
)]
pub async fn nfts_placeholder() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: NFTS_PLACEHOLDER.to_string(),
    })
}
