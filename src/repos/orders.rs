// src/repos/orders.rs

use crate::errors::Result;
use crate::models::{Order, OrderStatus};
use sqlx::PgExecutor;

pub async fn insert(
  exec: impl PgExecutor<'_>,
  user_id: i64,
  product_id: i64,
  quantity: i32,
  status: OrderStatus,
) -> Result<Order> {
  let order = sqlx::query_as::<_, Order>(
    "INSERT INTO orders (user_id, product_id, quantity, status) VALUES ($1, $2, $3, $4) \
     RETURNING id, user_id, product_id, quantity, status, created_at, updated_at",
  )
  .bind(user_id)
  .bind(product_id)
  .bind(quantity)
  .bind(status)
  .fetch_one(exec)
  .await?;
  Ok(order)
}

pub async fn fetch(exec: impl PgExecutor<'_>, id: i64) -> Result<Option<Order>> {
  let order = sqlx::query_as::<_, Order>(
    "SELECT id, user_id, product_id, quantity, status, created_at, updated_at FROM orders WHERE id = $1",
  )
  .bind(id)
  .fetch_optional(exec)
  .await?;
  Ok(order)
}

pub async fn set_status(exec: impl PgExecutor<'_>, id: i64, status: OrderStatus) -> Result<Option<Order>> {
  let order = sqlx::query_as::<_, Order>(
    "UPDATE orders SET status = $2, updated_at = now() WHERE id = $1 \
     RETURNING id, user_id, product_id, quantity, status, created_at, updated_at",
  )
  .bind(id)
  .bind(status)
  .fetch_optional(exec)
  .await?;
  Ok(order)
}
