// src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{invoice_handlers, order_handlers, payment_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Malformed bodies answer with the same structured JSON shape as every
  // other failure, not the framework's plain-text default.
  cfg.app_data(
    web::JsonConfig::default()
      .error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into()),
  );
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog Routes
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
          .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
          .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
      )
      // Order Routes
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::create_order_handler))
          .route(
            "/{order_id}/status",
            web::put().to(order_handlers::update_order_status_handler),
          ),
      )
      // Invoice Routes
      .service(
        web::scope("/invoices").route("/{order_id}", web::post().to(invoice_handlers::generate_invoice_handler)),
      )
      // Payment Routes
      .service(web::scope("/payments").route("", web::post().to(payment_handlers::process_payment_handler))),
  );
}
