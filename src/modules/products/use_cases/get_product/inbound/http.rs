use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado.";
pub const GET_PRODUCT_FAILED: &str = "Error al obtener el producto.";

pub async fn handle(State(state): State<AppState>, Path(pid): Path<String>) -> impl IntoResponse {
    match state.products.find_by_id(&pid).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, product_id = %pid, "failed to load product");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GET_PRODUCT_FAILED)
        }
    }
}
