// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::OrderStatus;
use crate::pipelines::order_pipeline;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct CreateOrderPayload {
  pub product_id: i64,
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusPayload {
  pub status: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::create_order",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateOrderPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order = order_pipeline::place_order(
    &app_state.db_pool,
    auth_user.user_id,
    req_payload.product_id,
    req_payload.quantity,
  )
  .await?;

  info!(order_id = order.id, "Order created for user {}.", auth_user.user_id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Order created successfully.",
      "order": order
  })))
}

#[instrument(
    name = "handler::update_order_status",
    skip(app_state, path, req_payload),
    fields(order_id = %path.as_ref(), requested_status = %req_payload.status)
)]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateOrderStatusPayload>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  // Boundary validation: the status wire form is a string, but only the
  // closed set parses.
  let new_status = OrderStatus::parse(&req_payload.status)
    .ok_or_else(|| AppError::Validation(format!("Unknown order status '{}'", req_payload.status)))?;

  let order = order_pipeline::update_order_status(
    &app_state.db_pool,
    order_id,
    new_status,
    app_state.config.enforce_status_transitions,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated successfully.",
      "order": order
  })))
}
