use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tracing::info;

use crate::server::handlers::{self, AppState};
use crate::store::CatalogStore;

/// Build the application router.
///
/// Entity routes are served both at the root and under `/api`.
pub fn router(store: Arc<CatalogStore>) -> Router {
  let entities = Router::new()
    .route(
      "/produk",
      get(handlers::list_products)
        .post(handlers::create_product)
        .fallback(handlers::method_not_allowed),
    )
    .route(
      "/produk/{id}",
      get(handlers::get_product)
        .put(handlers::update_product)
        .delete(handlers::delete_product)
        .fallback(handlers::method_not_allowed),
    )
    .route(
      "/categories",
      get(handlers::list_categories)
        .post(handlers::create_category)
        .fallback(handlers::method_not_allowed),
    )
    .route(
      "/categories/{id}",
      get(handlers::get_category)
        .put(handlers::update_category)
        .delete(handlers::delete_category)
        .fallback(handlers::method_not_allowed),
    );

  Router::<AppState>::new()
    .merge(entities.clone())
    .nest("/api", entities)
    .route(
      "/api/stats",
      get(handlers::stats).fallback(handlers::method_not_allowed),
    )
    .route(
      "/api/category-options",
      get(handlers::category_options).fallback(handlers::method_not_allowed),
    )
    .layer(middleware::from_fn(log_request))
    .with_state(store)
}

async fn log_request(request: Request, next: Next) -> Response {
  let method = request.method().clone();
  let uri = request.uri().clone();
  let started = Instant::now();

  let response = next.run(request).await;

  info!(
    "{} {} -> {} ({:?})",
    method,
    uri,
    response.status().as_u16(),
    started.elapsed()
  );
  response
}
