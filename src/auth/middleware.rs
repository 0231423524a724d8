// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Authentication middleware for Axum.
//!
//! Applied to the `/nfts` router subtree via
//! `axum::middleware::from_fn_with_state`. Each request either continues
//! with a [`Principal`] in its extensions or short-circuits with 401.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AuthError;
use crate::models::Principal;
use crate::state::AppState;

/// Authentication middleware function.
///
/// Reads the Authorization header (an optional `Bearer ` prefix is
/// stripped), delegates verification to the configured
/// [`super::TokenVerifier`], and attaches the verified principal to the
/// request. Every failure mode returns the uniform 401 response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = match extract_credential(&request) {
        Ok(credential) => credential.to_owned(),
        Err(e) => return e.into_response(),
    };

    match state.verifier.verify_token(&credential).await {
        Ok(principal) => {
            request.extensions_mut().insert::<Principal>(principal);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

/// Pull the bearer credential out of the Authorization header.
fn extract_credential(request: &Request) -> Result<&str, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidAuthHeader)?;

    // Clients send either the raw credential or the conventional
    // `Bearer <credential>` form; accept both.
    Ok(value.strip_prefix("Bearer ").unwrap_or(value).trim())
}
