// src/repos/invoices.rs

use crate::errors::Result;
use crate::models::Invoice;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

pub async fn insert(
  exec: impl PgExecutor<'_>,
  order_id: i64,
  total_amount_cents: i64,
  invoice_date: DateTime<Utc>,
) -> Result<Invoice> {
  let invoice = sqlx::query_as::<_, Invoice>(
    "INSERT INTO invoices (order_id, total_amount_cents, invoice_date) VALUES ($1, $2, $3) \
     RETURNING id, order_id, total_amount_cents, invoice_date",
  )
  .bind(order_id)
  .bind(total_amount_cents)
  .bind(invoice_date)
  .fetch_one(exec)
  .await?;
  Ok(invoice)
}

pub async fn fetch_by_order(exec: impl PgExecutor<'_>, order_id: i64) -> Result<Option<Invoice>> {
  let invoice = sqlx::query_as::<_, Invoice>(
    "SELECT id, order_id, total_amount_cents, invoice_date FROM invoices WHERE order_id = $1",
  )
  .bind(order_id)
  .fetch_optional(exec)
  .await?;
  Ok(invoice)
}
