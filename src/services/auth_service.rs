// src/services/auth_service.rs

//! Resolves caller identity issued by the external authentication service.
//!
//! The auth service owns registration, login and session issuance; the only
//! contract this application relies on is the `sessions` table it maintains,
//! which maps an opaque bearer token to a user id.

use crate::errors::Result;
use sqlx::PgPool;
use tracing::{debug, instrument};

/// Looks up a bearer token in the session store. Expired sessions resolve to
/// `None`, exactly like tokens that were never issued.
#[instrument(name = "auth_service::resolve_bearer_token", skip(db_pool, token), fields(token_len = token.len()))]
pub async fn resolve_bearer_token(db_pool: &PgPool, token: &str) -> Result<Option<i64>> {
  if token.is_empty() {
    debug!("Empty bearer token; skipping lookup.");
    return Ok(None);
  }

  let row: Option<(i64,)> =
    sqlx::query_as("SELECT user_id FROM sessions WHERE token = $1 AND (expires_at IS NULL OR expires_at > now())")
      .bind(token)
      .fetch_optional(db_pool)
      .await?;

  debug!(resolved = row.is_some(), "Bearer token lookup finished.");
  Ok(row.map(|(user_id,)| user_id))
}
