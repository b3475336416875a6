use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::carts::use_cases::add_product_to_cart::inbound::http as add_to_cart_http;
use crate::modules::carts::use_cases::create_cart::inbound::http as create_cart_http;
use crate::modules::carts::use_cases::list_cart_products::inbound::http as list_cart_http;
use crate::modules::products::use_cases::create_product::inbound::http as create_product_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_product_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_products_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let products = get(list_products_http::handle).post(create_product_http::handle);
    let carts = post(create_cart_http::handle);
    Router::new()
        .route("/api/products", products.clone())
        .route("/api/products/", products)
        .route("/api/products/{pid}", get(get_product_http::handle))
        .route("/api/carts", carts.clone())
        .route("/api/carts/", carts)
        .route("/api/carts/{cid}", get(list_cart_http::handle))
        .route(
            "/api/carts/{cid}/product/{pid}",
            post(add_to_cart_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
