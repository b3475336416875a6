use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

use crate::modules::products::core::product::NewProduct;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub const CREATE_PRODUCT_FAILED: &str = "Error al agregar el producto.";

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Bodies without a JSON content type, and empty bodies, create a product
/// with no fields. JSON bodies must be objects.
fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<NewProduct, serde_json::Error> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewProduct::default());
    }
    serde_json::from_slice(body)
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let input = match parse_body(&headers, &body) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "rejected product body");
            return error_response(StatusCode::BAD_REQUEST, CREATE_PRODUCT_FAILED);
        }
    };

    match state.products.create(input).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to create product");
            error_response(StatusCode::BAD_REQUEST, CREATE_PRODUCT_FAILED)
        }
    }
}
