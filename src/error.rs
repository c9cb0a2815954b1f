use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::protocol::DecodeError;
use crate::render::RenderError;
use crate::store::StoreError;

/// Errors surfaced to an HTTP client. Each one ends only the request that
/// produced it.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("{0}")]
  Serialization(#[from] RenderError),

  #[error("{0}")]
  Internal(String),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Serialization(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<StoreError> for ApiError {
  fn from(e: StoreError) -> Self {
    match e {
      StoreError::NotFound { .. } => ApiError::NotFound(e.to_string()),
      StoreError::Poisoned(_) => ApiError::Internal(e.to_string()),
    }
  }
}

impl From<DecodeError> for ApiError {
  fn from(e: DecodeError) -> Self {
    ApiError::BadRequest(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!("Request failed: {}", self);
    } else {
      warn!("Request rejected ({}): {}", status.as_u16(), self);
    }
    (status, self.to_string()).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_store_error_mapping() {
    let err: ApiError = StoreError::NotFound { kind: "produk", id: 3 }.into();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "produk not found");

    let err: ApiError = StoreError::Poisoned("category").into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_decode_error_mapping() {
    let err: ApiError = DecodeError::InvalidId("x".to_string()).into();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "invalid id");
  }

  #[test]
  fn test_method_not_allowed() {
    let response = ApiError::MethodNotAllowed.into_response();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
  }
}
