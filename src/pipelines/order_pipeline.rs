// src/pipelines/order_pipeline.rs

use crate::errors::{AppError, Result};
use crate::models::{Order, OrderStatus};
use crate::repos::{orders, products};
use sqlx::PgPool;
use tracing::{info, instrument, warn};

/// Places an order for `quantity` units of `product_id` on behalf of the
/// authenticated caller.
///
/// The stock check and decrement are one conditional UPDATE inside the
/// transaction, so two simultaneous orders against the last unit can never
/// both succeed and stock never goes negative.
#[instrument(name = "pipeline::place_order", skip(db_pool))]
pub async fn place_order(db_pool: &PgPool, user_id: i64, product_id: i64, quantity: i32) -> Result<Order> {
  if quantity < 1 {
    return Err(AppError::Validation("quantity must be at least 1".to_string()));
  }

  let mut tx = db_pool.begin().await?;

  let updated_rows = products::decrement_stock(&mut *tx, product_id, quantity).await?;
  if updated_rows == 0 {
    // Zero rows means the product is missing or short on stock; look it up
    // to answer with the right error. Nothing was written either way.
    return match products::fetch(&mut *tx, product_id).await? {
      None => Err(AppError::NotFound(format!("Product {} not found", product_id))),
      Some(product) => {
        warn!(
          available = product.stock,
          requested = quantity,
          "Rejecting order: insufficient stock."
        );
        Err(AppError::InsufficientStock(format!(
          "Insufficient stock for product {}: {} available, {} requested",
          product_id, product.stock, quantity
        )))
      }
    };
  }

  let order = orders::insert(&mut *tx, user_id, product_id, quantity, OrderStatus::Pending).await?;
  tx.commit().await?;

  info!(order_id = order.id, "Order placed.");
  Ok(order)
}

/// Overwrites an order's status. Transition legality is only checked when
/// the `ORDER_STATUS_ENFORCE_TRANSITIONS` hook is enabled; by default any
/// status in the closed set is accepted, matching the deployed behavior.
#[instrument(name = "pipeline::update_order_status", skip(db_pool))]
pub async fn update_order_status(
  db_pool: &PgPool,
  order_id: i64,
  new_status: OrderStatus,
  enforce_transitions: bool,
) -> Result<Order> {
  let mut tx = db_pool.begin().await?;

  let order = orders::fetch(&mut *tx, order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

  if enforce_transitions && !order.status.can_transition_to(new_status) {
    return Err(AppError::Conflict(format!(
      "Order {} cannot move from '{}' to '{}'",
      order_id, order.status, new_status
    )));
  }

  let updated = orders::set_status(&mut *tx, order_id, new_status)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
  tx.commit().await?;

  info!(order_id, status = %updated.status, "Order status updated.");
  Ok(updated)
}
