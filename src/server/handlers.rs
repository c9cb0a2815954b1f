//! Route handlers
//!
//! Every handler finishes its store call before rendering, so no collection
//! lock is held while a body is built or written.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use bytes::Bytes;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::model::{Category, CategoryInput, Product, ProductInput, Stats};
use crate::protocol::{InputFormat, decode_body, parse_id, product_filter, response_mode};
use crate::render::{Rendered, category_options as render_options};
use crate::store::{CatalogStore, CategoryNames};

pub type AppState = Arc<CatalogStore>;

type ApiResult<T> = Result<T, ApiError>;

/// `POST /produk`: JSON or form body
pub async fn create_product(
  State(store): State<AppState>,
  headers: HeaderMap,
  body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
  let format = InputFormat::from_headers(&headers);
  let input: ProductInput = decode_body(format, &body)?;
  let product = store.create_product(input)?;
  info!("Created produk {} from {} body", product.id, format);
  Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /produk?nama=&minHarga=&maxHarga=`
pub async fn list_products(
  State(store): State<AppState>,
  headers: HeaderMap,
  uri: Uri,
) -> ApiResult<Rendered> {
  let filter = product_filter(uri.query());
  let mode = response_mode(&headers);
  let renderer = mode.renderer();

  // product snapshot first, then category snapshot; never both locks at once
  let products = store.list_products(&filter)?;
  let names = if renderer.needs_category_names() {
    store.category_names()?
  } else {
    CategoryNames::default()
  };
  debug!("Listing {} produk as {}", products.len(), mode);

  Ok(renderer.products(&products, &names)?)
}

pub async fn get_product(
  State(store): State<AppState>,
  Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
  let id = parse_id(&id)?;
  Ok(Json(store.get_product(id)?))
}

/// `PUT /produk/{id}`: JSON body only
pub async fn update_product(
  State(store): State<AppState>,
  Path(id): Path<String>,
  body: Bytes,
) -> ApiResult<Json<Product>> {
  let id = parse_id(&id)?;
  let input: ProductInput = decode_body(InputFormat::Json, &body)?;
  let product = store.update_product(id, input)?;
  info!("Updated produk {}", id);
  Ok(Json(product))
}

pub async fn delete_product(
  State(store): State<AppState>,
  Path(id): Path<String>,
) -> ApiResult<StatusCode> {
  let id = parse_id(&id)?;
  store.delete_product(id)?;
  info!("Deleted produk {}", id);
  Ok(StatusCode::NO_CONTENT)
}

/// `POST /categories`: JSON or form body
pub async fn create_category(
  State(store): State<AppState>,
  headers: HeaderMap,
  body: Bytes,
) -> ApiResult<(StatusCode, Json<Category>)> {
  let format = InputFormat::from_headers(&headers);
  let input: CategoryInput = decode_body(format, &body)?;
  let category = store.create_category(input)?;
  info!("Created category {} from {} body", category.id, format);
  Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_categories(
  State(store): State<AppState>,
  headers: HeaderMap,
) -> ApiResult<Rendered> {
  let mode = response_mode(&headers);
  let categories = store.list_categories()?;
  debug!("Listing {} categories as {}", categories.len(), mode);
  Ok(mode.renderer().categories(&categories)?)
}

pub async fn get_category(
  State(store): State<AppState>,
  Path(id): Path<String>,
) -> ApiResult<Json<Category>> {
  let id = parse_id(&id)?;
  Ok(Json(store.get_category(id)?))
}

/// `PUT /categories/{id}`: JSON body only
pub async fn update_category(
  State(store): State<AppState>,
  Path(id): Path<String>,
  body: Bytes,
) -> ApiResult<Json<Category>> {
  let id = parse_id(&id)?;
  let input: CategoryInput = decode_body(InputFormat::Json, &body)?;
  let category = store.update_category(id, input)?;
  info!("Updated category {}", id);
  Ok(Json(category))
}

pub async fn delete_category(
  State(store): State<AppState>,
  Path(id): Path<String>,
) -> ApiResult<StatusCode> {
  let id = parse_id(&id)?;
  store.delete_category(id)?;
  info!("Deleted category {}", id);
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/stats`
pub async fn stats(State(store): State<AppState>) -> ApiResult<Json<Stats>> {
  Ok(Json(store.stats()?))
}

/// `GET /api/category-options`
pub async fn category_options(State(store): State<AppState>) -> ApiResult<Rendered> {
  let categories = store.list_categories()?;
  Ok(render_options(&categories))
}

pub async fn method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}
