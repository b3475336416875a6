use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub const CREATE_CART_FAILED: &str = "Error al crear el carrito.";

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.carts.create_cart().await {
        Ok(cart) => (StatusCode::CREATED, Json(cart)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to create cart");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, CREATE_CART_FAILED)
        }
    }
}
