//! Response rendering
//!
//! A result list is rendered either as structured JSON for API clients or as
//! an HTML fragment for partial-page replacement. Both variants implement
//! [`Renderer`] and work from owned snapshots, so no store lock is held while
//! a response body is built.

pub mod fragment;
pub mod json;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use thiserror::Error;

use crate::model::{Category, Product};
use crate::store::CategoryNames;

pub use fragment::{FragmentRenderer, category_options};
pub use json::JsonRenderer;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

#[derive(Debug, Error)]
pub enum RenderError {
  #[error("failed to encode response: {0}")]
  Json(#[from] serde_json::Error),
}

/// Which representation the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseMode {
  #[display("json")]
  Json,
  #[display("fragment")]
  Fragment,
}

impl ResponseMode {
  pub fn renderer(self) -> &'static dyn Renderer {
    match self {
      ResponseMode::Json => &JsonRenderer,
      ResponseMode::Fragment => &FragmentRenderer,
    }
  }
}

/// A finished response body and its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
  pub content_type: &'static str,
  pub body: String,
}

impl Rendered {
  pub fn json(body: String) -> Self {
    Self {
      content_type: CONTENT_TYPE_JSON,
      body,
    }
  }

  pub fn html(body: String) -> Self {
    Self {
      content_type: CONTENT_TYPE_HTML,
      body,
    }
  }
}

impl IntoResponse for Rendered {
  fn into_response(self) -> Response {
    ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
  }
}

/// Renders list results in one representation.
pub trait Renderer: Send + Sync {
  /// Whether product rows need category names resolved
  fn needs_category_names(&self) -> bool;

  fn products(&self, products: &[Product], names: &CategoryNames) -> Result<Rendered, RenderError>;

  fn categories(&self, categories: &[Category]) -> Result<Rendered, RenderError>;
}
