// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Unprocessable Entity: {0}")]
  Unprocessable(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Insufficient Stock: {0}")]
  InsufficientStock(String),

  #[error("Insufficient Payment: {0}")]
  InsufficientPayment(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError for convenience in code
// that uses `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::InsufficientStock(_) | AppError::InsufficientPayment(_) => {
        StatusCode::BAD_REQUEST
      }
      AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Conflict(_) => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let message = match self {
      AppError::Validation(m)
      | AppError::Unprocessable(m)
      | AppError::Auth(m)
      | AppError::NotFound(m)
      | AppError::Conflict(m)
      | AppError::InsufficientStock(m)
      | AppError::InsufficientPayment(m) => m.clone(),
      // Storage, configuration and internal failures keep their detail in the
      // log line above; clients only get a generic message.
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
    };
    HttpResponse::build(self.status_code()).json(json!({ "message": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;
  use serde_json::Value;

  #[test]
  fn taxonomy_maps_to_expected_status_codes() {
    let cases = [
      (AppError::Validation("v".into()), StatusCode::BAD_REQUEST),
      (AppError::InsufficientStock("s".into()), StatusCode::BAD_REQUEST),
      (AppError::InsufficientPayment("p".into()), StatusCode::BAD_REQUEST),
      (AppError::Unprocessable("u".into()), StatusCode::UNPROCESSABLE_ENTITY),
      (AppError::Auth("a".into()), StatusCode::UNAUTHORIZED),
      (AppError::NotFound("n".into()), StatusCode::NOT_FOUND),
      (AppError::Conflict("c".into()), StatusCode::CONFLICT),
      (AppError::Internal("i".into()), StatusCode::INTERNAL_SERVER_ERROR),
      (AppError::Config("c".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, expected) in cases {
      assert_eq!(err.status_code(), expected, "wrong status for {err}");
    }
  }

  #[actix_rt::test]
  async fn business_errors_expose_their_message() {
    let resp = AppError::InsufficientStock("only 2 left".into()).error_response();
    let body: Value = serde_json::from_slice(&to_bytes(resp.into_body()).await.unwrap()).unwrap();
    assert_eq!(body["message"], "only 2 left");
  }

  #[actix_rt::test]
  async fn internal_errors_are_redacted() {
    let resp = AppError::Internal("connection refused on 10.0.0.3".into()).error_response();
    let body: Value = serde_json::from_slice(&to_bytes(resp.into_body()).await.unwrap()).unwrap();
    assert_eq!(body["message"], "An internal error occurred");
  }
}
