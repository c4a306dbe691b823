// src/pipelines/payment_pipeline.rs

use crate::errors::{AppError, Result};
use crate::models::{Order, OrderStatus, Payment};
use crate::repos::{invoices, orders, payments};
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

/// Records a payment against an order's invoice and completes the order.
///
/// Everything that can be rejected is rejected before the first write. The
/// payment insert and the status update then share one transaction: if
/// either fails, the transaction drops un-committed and nothing is applied.
/// Overpayment is accepted and recorded as-is.
#[instrument(name = "pipeline::process_payment", skip(db_pool, payment_method))]
pub async fn process_payment(
  db_pool: &PgPool,
  order_id: i64,
  payment_method: &str,
  amount_paid_cents: i64,
) -> Result<(Payment, Order)> {
  if payment_method.trim().is_empty() {
    return Err(AppError::Validation("payment_method must not be empty".to_string()));
  }
  if amount_paid_cents <= 0 {
    return Err(AppError::Validation("amount_paid_cents must be positive".to_string()));
  }

  let mut tx = db_pool.begin().await?;

  let order = orders::fetch(&mut *tx, order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

  if order.status == OrderStatus::Completed {
    return Err(AppError::Conflict(format!("Order {} is already completed", order_id)));
  }

  let invoice = invoices::fetch_by_order(&mut *tx, order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No invoice found for order {}", order_id)))?;

  if amount_paid_cents < invoice.total_amount_cents {
    warn!(
      owed = invoice.total_amount_cents,
      offered = amount_paid_cents,
      "Rejecting payment: amount below invoice total."
    );
    return Err(AppError::InsufficientPayment(format!(
      "Amount paid {} is below the invoice total {}",
      amount_paid_cents, invoice.total_amount_cents
    )));
  }

  let payment = payments::insert(&mut *tx, order_id, payment_method, amount_paid_cents, Utc::now()).await?;
  let order = orders::set_status(&mut *tx, order_id, OrderStatus::Completed)
    .await?
    .ok_or_else(|| AppError::Internal(format!("Order {} vanished while recording its payment", order_id)))?;

  tx.commit().await?;

  info!(payment_id = payment.id, order_id, "Payment recorded, order completed.");
  Ok((payment, order))
}
