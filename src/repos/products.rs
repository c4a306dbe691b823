// src/repos/products.rs

use crate::errors::Result;
use crate::models::Product;
use sqlx::PgExecutor;

const PRODUCT_COLUMNS: &str = "id, name, price_cents, stock, created_at, updated_at";

pub async fn insert(exec: impl PgExecutor<'_>, name: &str, price_cents: i64, stock: i32) -> Result<Product> {
  let product = sqlx::query_as::<_, Product>(
    "INSERT INTO products (name, price_cents, stock) VALUES ($1, $2, $3) \
     RETURNING id, name, price_cents, stock, created_at, updated_at",
  )
  .bind(name)
  .bind(price_cents)
  .bind(stock)
  .fetch_one(exec)
  .await?;
  Ok(product)
}

pub async fn fetch(exec: impl PgExecutor<'_>, id: i64) -> Result<Option<Product>> {
  let product = sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
    .bind(id)
    .fetch_optional(exec)
    .await?;
  Ok(product)
}

/// Lists products, optionally filtered by a case-insensitive name substring.
pub async fn list(exec: impl PgExecutor<'_>, name_filter: Option<&str>) -> Result<Vec<Product>> {
  let products = match name_filter {
    Some(q) if !q.is_empty() => {
      sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE name ILIKE '%' || $1 || '%' ORDER BY name ASC"
      ))
      .bind(q)
      .fetch_all(exec)
      .await?
    }
    _ => {
      sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC"))
        .fetch_all(exec)
        .await?
    }
  };
  Ok(products)
}

/// Partial update; `None` fields keep their current value.
pub async fn update(
  exec: impl PgExecutor<'_>,
  id: i64,
  name: Option<&str>,
  price_cents: Option<i64>,
  stock: Option<i32>,
) -> Result<Option<Product>> {
  let product = sqlx::query_as::<_, Product>(
    "UPDATE products \
     SET name = COALESCE($2, name), \
         price_cents = COALESCE($3, price_cents), \
         stock = COALESCE($4, stock), \
         updated_at = now() \
     WHERE id = $1 \
     RETURNING id, name, price_cents, stock, created_at, updated_at",
  )
  .bind(id)
  .bind(name)
  .bind(price_cents)
  .bind(stock)
  .fetch_optional(exec)
  .await?;
  Ok(product)
}

pub async fn delete(exec: impl PgExecutor<'_>, id: i64) -> Result<bool> {
  let result = sqlx::query("DELETE FROM products WHERE id = $1").bind(id).execute(exec).await?;
  Ok(result.rows_affected() > 0)
}

/// Conditionally decrements stock in one statement. Returns the number of
/// rows updated: zero means the product is missing or holds less stock than
/// requested, and nothing was written. This is the serialization point that
/// keeps concurrent placements from overselling.
pub async fn decrement_stock(exec: impl PgExecutor<'_>, id: i64, quantity: i32) -> Result<u64> {
  let result = sqlx::query("UPDATE products SET stock = stock - $2, updated_at = now() WHERE id = $1 AND stock >= $2")
    .bind(id)
    .bind(quantity)
    .execute(exec)
    .await?;
  Ok(result.rows_affected())
}
