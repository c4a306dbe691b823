// src/pipelines/invoice_pipeline.rs

use crate::errors::{AppError, Result};
use crate::models::Invoice;
use crate::repos::{invoices, is_unique_violation, orders, products};
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Issues the invoice for an order, snapshotting the amount owed at the
/// current product price. An order gets at most one invoice.
#[instrument(name = "pipeline::generate_invoice", skip(db_pool))]
pub async fn generate_invoice(db_pool: &PgPool, order_id: i64) -> Result<Invoice> {
  let mut tx = db_pool.begin().await?;

  let order = orders::fetch(&mut *tx, order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

  if invoices::fetch_by_order(&mut *tx, order_id).await?.is_some() {
    return Err(AppError::Conflict(format!("Invoice already exists for order {}", order_id)));
  }

  let product = products::fetch(&mut *tx, order.product_id).await?.ok_or_else(|| {
    AppError::NotFound(format!(
      "Product {} referenced by order {} not found",
      order.product_id, order_id
    ))
  })?;

  let total_amount_cents = invoice_total_cents(product.price_cents, order.quantity);

  // The UNIQUE constraint on invoices.order_id is the backstop for two
  // generation requests racing past the existence check above.
  let invoice = invoices::insert(&mut *tx, order_id, total_amount_cents, Utc::now())
    .await
    .map_err(|err| match err {
      AppError::Sqlx(db_err) if is_unique_violation(&db_err) => {
        AppError::Conflict(format!("Invoice already exists for order {}", order_id))
      }
      other => other,
    })?;
  tx.commit().await?;

  info!(invoice_id = invoice.id, order_id, total_amount_cents, "Invoice issued.");
  Ok(invoice)
}

/// Amount owed: unit price times quantity, both in cents.
pub fn invoice_total_cents(price_cents: i64, quantity: i32) -> i64 {
  price_cents * i64::from(quantity)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_is_unit_price_times_quantity() {
    assert_eq!(invoice_total_cents(100_000, 2), 200_000);
    assert_eq!(invoice_total_cents(0, 7), 0);
    assert_eq!(invoice_total_cents(1, 1), 1);
  }
}
