// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Credential verification delegated to the external zkLogin service.
//!
//! This process performs no zkLogin cryptography. The credential from the
//! Authorization header is forwarded verbatim to the verification endpoint,
//! which either returns the player's Sui address or rejects the credential.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::models::{Principal, SuiAddress};

/// Collaborator contract for credential verification.
///
/// `verify_token(credential) -> principal`; fails with [`AuthError`] on
/// rejection or transport failure. Implemented over HTTP in production and
/// by mocks in tests.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, credential: &str) -> Result<Principal, AuthError>;
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    address: String,
}

/// HTTP-backed verifier posting to the zkLogin verification endpoint.
///
/// Request: `POST {verify_url}` with `{"token": <credential>}`.
/// Response: `{"address": "<sui address>"}` on success; any non-success
/// status is a rejection.
pub struct HttpZkLoginVerifier {
    client: reqwest::Client,
    verify_url: String,
}

impl HttpZkLoginVerifier {
    pub fn new(client: reqwest::Client, verify_url: impl Into<String>) -> Self {
        Self {
            client,
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpZkLoginVerifier {
    async fn verify_token(&self, credential: &str) -> Result<Principal, AuthError> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&VerifyRequest { token: credential })
            .send()
            .await
            .map_err(|e| AuthError::VerifierUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::VerificationFailed(format!(
                "verifier returned {}",
                response.status()
            )));
        }

        let verified: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        Ok(Principal {
            address: SuiAddress(verified.address),
        })
    }
}
