//! Request decoding
//!
//! Each request is classified once: its body format from `Content-Type` and
//! the response representation from `HX-Request`. Bodies are then handed to
//! one of two pure decoders.

pub mod decode;
pub mod form;

pub use decode::{Decode, DecodeError, InputFormat, decode_body, parse_id};
pub use form::FormFields;

use axum::http::HeaderMap;

use crate::filter::ProductFilter;
use crate::render::ResponseMode;

/// Header set by HTMX on every request it issues
pub const HX_REQUEST: &str = "HX-Request";

/// Fragment mode when the caller is the HTMX frontend, JSON otherwise
pub fn response_mode(headers: &HeaderMap) -> ResponseMode {
  match headers.get(HX_REQUEST).and_then(|v| v.to_str().ok()) {
    Some("true") => ResponseMode::Fragment,
    _ => ResponseMode::Json,
  }
}

/// Build the product filter from `?nama=&minHarga=&maxHarga=`.
///
/// Bounds that fail to parse become zero, which the filter treats as unset.
pub fn product_filter(query: Option<&str>) -> ProductFilter {
  let fields = FormFields::parse_lossy(query.unwrap_or_default().as_bytes());
  ProductFilter::new(
    fields.text("nama"),
    fields.number("minHarga"),
    fields.number("maxHarga"),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;

  #[test]
  fn test_response_mode() {
    let mut headers = HeaderMap::new();
    assert_eq!(response_mode(&headers), ResponseMode::Json);

    headers.insert(HX_REQUEST, HeaderValue::from_static("false"));
    assert_eq!(response_mode(&headers), ResponseMode::Json);

    headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
    assert_eq!(response_mode(&headers), ResponseMode::Fragment);
  }

  #[test]
  fn test_product_filter_from_query() {
    let filter = product_filter(Some("nama=Kopi&minHarga=10000&maxHarga=50000"));
    assert_eq!(filter, ProductFilter::new("Kopi", 10000, 50000));
  }

  #[test]
  fn test_product_filter_lenient_numbers() {
    let filter = product_filter(Some("minHarga=abc&maxHarga="));
    assert_eq!(filter, ProductFilter::default());

    assert_eq!(product_filter(None), ProductFilter::default());
  }

  #[test]
  fn test_product_filter_decodes_escapes() {
    let filter = product_filter(Some("nama=kopi%20susu"));
    assert_eq!(filter.name.as_deref(), Some("kopi susu"));
  }
}
