// src/repos/mod.rs

//! Repository functions over the Postgres store. Every function takes an
//! executor, so the same call works against the pool or inside an open
//! transaction, and persistence stays visible at call sites.

pub mod invoices;
pub mod orders;
pub mod payments;
pub mod products;

/// Postgres unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
  matches!(err.as_database_error().and_then(|db| db.code()), Some(code) if code == "23505")
}

/// Postgres foreign-key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
  matches!(err.as_database_error().and_then(|db| db.code()), Some(code) if code == "23503")
}
