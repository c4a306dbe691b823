// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::repos::{self, products};
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub q: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CreateProductPayload {
  pub name: String,
  pub price_cents: i64,
  pub stock: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateProductPayload {
  pub name: Option<String>,
  pub price_cents: Option<i64>,
  pub stock: Option<i32>,
}

/// Field-type validation shared by create and partial update. Violations are
/// 422s, distinct from the 400s of the order workflow.
fn validate_product_fields(name: Option<&str>, price_cents: Option<i64>, stock: Option<i32>) -> Result<(), AppError> {
  if let Some(name) = name {
    if name.trim().is_empty() {
      return Err(AppError::Unprocessable("name must not be empty".to_string()));
    }
  }
  if let Some(price_cents) = price_cents {
    if price_cents < 0 {
      return Err(AppError::Unprocessable("price_cents must not be negative".to_string()));
    }
  }
  if let Some(stock) = stock {
    if stock < 0 {
      return Err(AppError::Unprocessable("stock must not be negative".to_string()));
    }
  }
  Ok(())
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = products::list(&app_state.db_pool, query_params.q.as_deref()).await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload), fields(product_name = %req_payload.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  validate_product_fields(
    Some(&req_payload.name),
    Some(req_payload.price_cents),
    Some(req_payload.stock),
  )?;

  let product = products::insert(
    &app_state.db_pool,
    req_payload.name.trim(),
    req_payload.price_cents,
    req_payload.stock,
  )
  .await?;
  info!(product_id = product.id, "Product created.");

  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match products::fetch(&app_state.db_pool, product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
        "message": "Product fetched successfully.",
        "product": product
    }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product {} not found", product_id)))
    }
  }
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  validate_product_fields(req_payload.name.as_deref(), req_payload.price_cents, req_payload.stock)?;

  let product = products::update(
    &app_state.db_pool,
    product_id,
    req_payload.name.as_deref().map(str::trim),
    req_payload.price_cents,
    req_payload.stock,
  )
  .await?
  .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;
  info!(product_id, "Product updated.");

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product updated successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let deleted = match products::delete(&app_state.db_pool, product_id).await {
    Err(AppError::Sqlx(db_err)) if repos::is_foreign_key_violation(&db_err) => {
      return Err(AppError::Conflict(format!(
        "Product {} is referenced by existing orders",
        product_id
      )));
    }
    other => other?,
  };

  if !deleted {
    return Err(AppError::NotFound(format!("Product {} not found", product_id)));
  }
  info!(product_id, "Product deleted.");

  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully." })))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn negative_price_and_stock_are_unprocessable() {
    assert!(matches!(
      validate_product_fields(Some("Laptop"), Some(-1), Some(3)),
      Err(AppError::Unprocessable(_))
    ));
    assert!(matches!(
      validate_product_fields(Some("Laptop"), Some(100), Some(-3)),
      Err(AppError::Unprocessable(_))
    ));
  }

  #[test]
  fn blank_name_is_unprocessable() {
    assert!(matches!(
      validate_product_fields(Some("   "), None, None),
      Err(AppError::Unprocessable(_))
    ));
  }

  #[test]
  fn absent_fields_pass_partial_validation() {
    assert!(validate_product_fields(None, None, None).is_ok());
    assert!(validate_product_fields(Some("Monitor"), Some(0), Some(0)).is_ok());
  }
}
