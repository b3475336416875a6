use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::carts::store::AddToCartOutcome;
use crate::shared::inbound::http::{ErrorBody, error_response};
use crate::shell::state::AppState;

pub const CART_NOT_FOUND: &str = "Carrito no encontrado.";
pub const ADD_PRODUCT_TO_CART_FAILED: &str = "Error al agregar el producto al carrito.";

/// A missing cart is answered with 200 and an error body, not with 404.
pub async fn handle(
    State(state): State<AppState>,
    Path((cid, pid)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.carts.add_product_to_cart(&cid, &pid).await {
        Ok(AddToCartOutcome::Updated(lines)) => Json(lines).into_response(),
        Ok(AddToCartOutcome::CartNotFound) => Json(ErrorBody::new(CART_NOT_FOUND)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, cart_id = %cid, product_id = %pid, "failed to add product to cart");
            error_response(StatusCode::BAD_REQUEST, ADD_PRODUCT_TO_CART_FAILED)
        }
    }
}
