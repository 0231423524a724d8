// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DB_URI` | Path to the redb database file | Required (startup fails without it) |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `ZKLOGIN_VERIFY_URL` | zkLogin token verification endpoint | `http://127.0.0.1:9001/v1/verify` |
//! | `NFT_SERVICE_URL` | Game-logic service base URL (NFT fetch/stake) | `http://127.0.0.1:9002` |
//! | `BRIDGE_SERVICE_URL` | Cross-chain transfer service base URL | `http://127.0.0.1:9003` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

/// Environment variable name for the database path.
///
/// The value is a filesystem path; the database file is created on first
/// startup if it does not exist. An unset variable or an unopenable path is
/// startup-fatal (the process exits with status 1 before listening).
pub const DB_URI_ENV: &str = "DB_URI";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the zkLogin verification endpoint.
///
/// Credential verification is fully delegated to this service; no zkLogin
/// cryptography happens in this process.
pub const ZKLOGIN_VERIFY_URL_ENV: &str = "ZKLOGIN_VERIFY_URL";

/// Environment variable name for the game-logic service base URL.
///
/// NFT retrieval and staking mechanics live behind this service.
pub const NFT_SERVICE_URL_ENV: &str = "NFT_SERVICE_URL";

/// Environment variable name for the cross-chain transfer service base URL.
pub const BRIDGE_SERVICE_URL_ENV: &str = "BRIDGE_SERVICE_URL";

/// Environment variable name for the logging format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default server bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default zkLogin verification endpoint (local development).
pub const DEFAULT_ZKLOGIN_VERIFY_URL: &str = "http://127.0.0.1:9001/v1/verify";

/// Default game-logic service base URL (local development).
pub const DEFAULT_NFT_SERVICE_URL: &str = "http://127.0.0.1:9002";

/// Default cross-chain transfer service base URL (local development).
pub const DEFAULT_BRIDGE_SERVICE_URL: &str = "http://127.0.0.1:9003";
