use axum::http::{HeaderMap, header};
use derive_more::Display;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{CategoryInput, Id, ProductInput};
use crate::protocol::form::FormFields;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body encoding of a write request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputFormat {
  #[display("json")]
  Json,
  #[display("form")]
  Form,
}

impl InputFormat {
  /// Form-encoded when `Content-Type` says so; everything else is read as JSON
  pub fn from_headers(headers: &HeaderMap) -> Self {
    let is_form = headers
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .is_some_and(|ct| ct.contains(FORM_CONTENT_TYPE));
    if is_form {
      InputFormat::Form
    } else {
      InputFormat::Json
    }
  }
}

#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("invalid JSON body: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid form body: {0}")]
  Form(#[from] serde_urlencoded::de::Error),

  #[error("invalid id")]
  InvalidId(String),
}

/// A write payload that can arrive as JSON or as form fields.
pub trait Decode: DeserializeOwned {
  /// Build from form fields. Numeric fields that fail to parse read as zero.
  fn from_form(fields: &FormFields) -> Self;
}

impl Decode for ProductInput {
  fn from_form(fields: &FormFields) -> Self {
    Self {
      name: fields.text("nama"),
      price: fields.number("harga"),
      stock: fields.number("stok"),
      category_id: fields.number("category_id"),
    }
  }
}

impl Decode for CategoryInput {
  fn from_form(fields: &FormFields) -> Self {
    Self {
      name: fields.text("name"),
      description: fields.text("description"),
    }
  }
}

/// Decode a request body with the decoder for `format`
pub fn decode_body<T: Decode>(format: InputFormat, body: &[u8]) -> Result<T, DecodeError> {
  match format {
    InputFormat::Json => Ok(serde_json::from_slice(body)?),
    InputFormat::Form => Ok(T::from_form(&FormFields::parse(body)?)),
  }
}

/// Parse the `{id}` path segment
pub fn parse_id(raw: &str) -> Result<Id, DecodeError> {
  raw
    .parse()
    .map_err(|_| DecodeError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;

  fn headers(content_type: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers
  }

  #[test]
  fn test_classify_input_format() {
    assert_eq!(InputFormat::from_headers(&HeaderMap::new()), InputFormat::Json);
    assert_eq!(
      InputFormat::from_headers(&headers("application/json")),
      InputFormat::Json
    );
    assert_eq!(
      InputFormat::from_headers(&headers("application/x-www-form-urlencoded; charset=UTF-8")),
      InputFormat::Form
    );
    assert_eq!(InputFormat::Form.to_string(), "form");
  }

  #[test]
  fn test_decode_json_product() {
    let input: ProductInput = decode_body(
      InputFormat::Json,
      br#"{"nama":"Kopi","harga":15000,"stok":10,"category_id":1}"#,
    )
    .unwrap();
    assert_eq!(
      input,
      ProductInput {
        name: "Kopi".to_string(),
        price: 15000,
        stock: 10,
        category_id: 1,
      }
    );
  }

  #[test]
  fn test_decode_malformed_json() {
    let result: Result<ProductInput, _> = decode_body(InputFormat::Json, b"{not json");
    assert!(matches!(result, Err(DecodeError::Json(_))));

    // wrong field type is rejected in JSON, unlike forms
    let result: Result<ProductInput, _> = decode_body(InputFormat::Json, br#"{"harga":"mahal"}"#);
    assert!(matches!(result, Err(DecodeError::Json(_))));
  }

  #[test]
  fn test_decode_form_product_lenient() {
    let input: ProductInput = decode_body(
      InputFormat::Form,
      b"nama=Kopi&harga=mahal&stok=10&category_id=",
    )
    .unwrap();
    assert_eq!(input.name, "Kopi");
    assert_eq!(input.price, 0);
    assert_eq!(input.stock, 10);
    assert_eq!(input.category_id, 0);
  }

  #[test]
  fn test_decode_form_category() {
    let input: CategoryInput =
      decode_body(InputFormat::Form, b"name=Beverages&description=Hot+%26+cold").unwrap();
    assert_eq!(input.name, "Beverages");
    assert_eq!(input.description, "Hot & cold");
  }

  #[test]
  fn test_parse_id() {
    assert_eq!(parse_id("42").unwrap(), 42);
    assert_eq!(parse_id("-1").unwrap(), -1);
    assert!(matches!(parse_id("abc"), Err(DecodeError::InvalidId(_))));
    assert!(matches!(parse_id(""), Err(DecodeError::InvalidId(_))));
  }
}
