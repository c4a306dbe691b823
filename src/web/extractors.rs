// src/web/extractors.rs

use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

/// Caller identity, resolved through the external authentication service's
/// session store. Only order placement requires it.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user_id: i64,
}

pub(crate) fn bearer_token(req: &HttpRequest) -> Option<String> {
  req
    .headers()
    .get(header::AUTHORIZATION)?
    .to_str()
    .ok()?
    .strip_prefix("Bearer ")
    .map(|token| token.trim().to_string())
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let app_state = req.app_data::<web::Data<AppState>>().cloned();
    let token = bearer_token(req);

    Box::pin(async move {
      let app_state = app_state.ok_or_else(|| AppError::Internal("AppState is not configured".to_string()))?;
      let token = token.ok_or_else(|| {
        warn!("AuthenticatedUser extractor: missing or malformed Authorization header.");
        AppError::Auth("Bearer authentication required.".to_string())
      })?;

      match auth_service::resolve_bearer_token(&app_state.db_pool, &token).await? {
        Some(user_id) => Ok(AuthenticatedUser { user_id }),
        None => {
          warn!("AuthenticatedUser extractor: bearer token did not resolve to a user.");
          Err(AppError::Auth("Invalid or expired session token.".to_string()))
        }
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn bearer_token_is_extracted_from_the_header() {
    let req = TestRequest::default()
      .insert_header((header::AUTHORIZATION, "Bearer tok_123"))
      .to_http_request();
    assert_eq!(bearer_token(&req), Some("tok_123".to_string()));
  }

  #[test]
  fn missing_header_yields_no_token() {
    let req = TestRequest::default().to_http_request();
    assert_eq!(bearer_token(&req), None);
  }

  #[test]
  fn non_bearer_schemes_are_ignored() {
    let req = TestRequest::default()
      .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwdw=="))
      .to_http_request();
    assert_eq!(bearer_token(&req), None);
  }
}
