use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub const LIST_PRODUCTS_FAILED: &str = "Error al obtener productos.";

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.products.list_all().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list products");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LIST_PRODUCTS_FAILED)
        }
    }
}
