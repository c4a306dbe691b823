// src/web/handlers/payment_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::pipelines::payment_pipeline;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ProcessPaymentPayload {
  pub order_id: i64,
  pub payment_method: String,
  pub amount_paid_cents: i64,
}

#[instrument(
    name = "handler::process_payment",
    skip(app_state, req_payload),
    fields(order_id = %req_payload.order_id, amount_paid_cents = %req_payload.amount_paid_cents)
)]
pub async fn process_payment_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ProcessPaymentPayload>,
) -> Result<HttpResponse, AppError> {
  let (payment, order) = payment_pipeline::process_payment(
    &app_state.db_pool,
    req_payload.order_id,
    &req_payload.payment_method,
    req_payload.amount_paid_cents,
  )
  .await?;

  info!(payment_id = payment.id, order_id = order.id, "Payment processed.");
  Ok(HttpResponse::Ok().json(json!({
      "message": "Payment successful.",
      "order_id": order.id,
      "status": order.status,
      "payment": payment
  })))
}
