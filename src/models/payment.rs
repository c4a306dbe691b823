// src/models/payment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};

/// Payments are only ever recorded as settled; refunds and partial payments
/// are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Paid,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Payment {
  pub id: i64,
  pub order_id: i64,
  pub payment_method: String,
  pub amount_paid_cents: i64,
  pub status: PaymentStatus,
  pub payment_date: DateTime<Utc>,
}
