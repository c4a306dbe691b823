// src/repos/payments.rs

use crate::errors::Result;
use crate::models::{Payment, PaymentStatus};
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

pub async fn insert(
  exec: impl PgExecutor<'_>,
  order_id: i64,
  payment_method: &str,
  amount_paid_cents: i64,
  payment_date: DateTime<Utc>,
) -> Result<Payment> {
  let payment = sqlx::query_as::<_, Payment>(
    "INSERT INTO payments (order_id, payment_method, amount_paid_cents, status, payment_date) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, order_id, payment_method, amount_paid_cents, status, payment_date",
  )
  .bind(order_id)
  .bind(payment_method)
  .bind(amount_paid_cents)
  .bind(PaymentStatus::Paid)
  .bind(payment_date)
  .fetch_one(exec)
  .await?;
  Ok(payment)
}

pub async fn fetch_by_order(exec: impl PgExecutor<'_>, order_id: i64) -> Result<Vec<Payment>> {
  let payments = sqlx::query_as::<_, Payment>(
    "SELECT id, order_id, payment_method, amount_paid_cents, status, payment_date \
     FROM payments WHERE order_id = $1 ORDER BY payment_date ASC",
  )
  .bind(order_id)
  .fetch_all(exec)
  .await?;
  Ok(payments)
}
