// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SuiQuest

//! Embedded database connector backed by redb (pure Rust, ACID).
//!
//! One process-wide handle is opened at startup from the `DB_URI` path and
//! shared through [`crate::state::AppState`]. Connection failure is
//! startup-fatal: `main` logs the error and exits with status 1 before the
//! HTTP listener is bound. No retry, no backoff.

use std::path::Path;

use redb::Database;

use crate::config::DB_URI_ENV;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{DB_URI_ENV} is not set")]
    MissingUri,

    #[error("failed to open database: {0}")]
    Open(#[from] redb::DatabaseError),
}

/// Open the process-wide database from the `DB_URI` environment variable.
pub fn connect() -> Result<Database, DbError> {
    let uri = std::env::var(DB_URI_ENV).map_err(|_| DbError::MissingUri)?;
    connect_path(&uri)
}

/// Open (creating if absent) the database file at `path`.
pub fn connect_path(path: impl AsRef<Path>) -> Result<Database, DbError> {
    let db = Database::create(path)?;
    Ok(db)
}
