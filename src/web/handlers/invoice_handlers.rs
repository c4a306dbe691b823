// src/web/handlers/invoice_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::pipelines::invoice_pipeline;
use crate::state::AppState;

#[instrument(name = "handler::generate_invoice", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn generate_invoice_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let invoice = invoice_pipeline::generate_invoice(&app_state.db_pool, order_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Invoice generated successfully.",
      "invoice": invoice
  })))
}
