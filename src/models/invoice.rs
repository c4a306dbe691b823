// src/models/invoice.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Amount owed for an order, snapshotted at creation time. Never updated:
/// later product price changes do not alter an issued invoice.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
  pub id: i64,
  pub order_id: i64,
  pub total_amount_cents: i64,
  pub invoice_date: DateTime<Utc>,
}
