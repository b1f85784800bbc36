//! Resource routes: one route per (resource, operation) pair.
//! Attach is a PUT with no body, matching the original surface.

use crate::handlers::{customers, orders, products};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::get)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", axum::routing::delete(orders::delete))
        .route("/orders/:id/products", get(orders::list_products))
        .route(
            "/orders/:id/add_product/:product_id",
            put(orders::attach_product),
        )
        .with_state(state)
}
