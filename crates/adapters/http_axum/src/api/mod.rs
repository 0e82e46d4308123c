//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod products;

use axum::Router;
use axum::routing::{get, post};

use stockroom_app::ports::ProductRepository;

use crate::state::AppState;

/// Build the product API router.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/products", get(products::list::<PR>))
        .route("/product", post(products::create::<PR>))
        .route(
            "/product/{id}",
            get(products::get::<PR>)
                .put(products::update::<PR>)
                .delete(products::delete::<PR>),
        )
}
