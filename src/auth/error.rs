// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Authentication errors.
//!
//! The wire response is uniform: every variant maps to HTTP 401 with the
//! body `{"error":"Unauthorized"}`. Variants exist so server-side logs can
//! distinguish a malformed header from an unreachable verification service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Wire message for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Authentication error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header present.
    #[error("Authorization header is required")]
    MissingAuthHeader,

    /// Authorization header is not valid UTF-8.
    #[error("Authorization header is not valid UTF-8")]
    InvalidAuthHeader,

    /// The verification service rejected the credential.
    #[error("credential rejected: {0}")]
    VerificationFailed(String),

    /// The verification service could not be reached.
    #[error("verification service unreachable: {0}")]
    VerifierUnreachable(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "authentication failed");
        let body = Json(AuthErrorBody {
            error: UNAUTHORIZED_MESSAGE.to_string(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
