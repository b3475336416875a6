use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub const LIST_CART_PRODUCTS_FAILED: &str = "Error al obtener productos del carrito.";

pub async fn handle(State(state): State<AppState>, Path(cid): Path<String>) -> impl IntoResponse {
    match state.carts.list_products_in_cart(&cid).await {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => {
            tracing::error!(error = %e, cart_id = %cid, "failed to list cart products");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LIST_CART_PRODUCTS_FAILED)
        }
    }
}
