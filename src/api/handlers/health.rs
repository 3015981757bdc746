use axum::Json;

use crate::api::response::ApiResponse;

/// GET /health
pub async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}
