// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! # Authentication Module
//!
//! This module provides zkLogin bearer authentication for the SuiQuest API.
//!
//! ## Auth Flow
//!
//! 1. Game client completes zkLogin and obtains a credential
//! 2. Client sends `Authorization: Bearer <credential>`
//! 3. Backend:
//!    - Delegates the credential to the external zkLogin verification
//!      service ([`verifier::HttpZkLoginVerifier`])
//!    - Attaches the verified [`crate::models::Principal`] to the request
//!      extensions
//!    - Passes control to the route handler
//!
//! ## Failure Policy
//!
//! Every failure mode — missing header, malformed header, rejected
//! credential, verification service unreachable — is surfaced to the client
//! as HTTP 401 with the body `{"error":"Unauthorized"}`. The distinct causes
//! exist only as [`AuthError`] variants for server-side logs; nothing about
//! the cause is distinguishable on the wire.

pub mod error;
pub mod middleware;
pub mod verifier;

pub use error::AuthError;
pub use middleware::authenticate;
pub use verifier::{HttpZkLoginVerifier, TokenVerifier};
