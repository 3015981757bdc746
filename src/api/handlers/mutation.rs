use axum::{extract::State, Json};
use serde_json::Value;
use crate::api::{error::ApiError, extractors::ActionRouterExtractor, response::ApiResponse, ApiState};

/// POST /process - JSON action endpoint
///
/// Expected JSON structure:
/// { "Accounts": { "GetAccount": 1 } }
/// { "Transactions": "TransactionStats" }
pub async fn process_mutation(
    State(state): State<ApiState>,
    ActionRouterExtractor(action_input): ActionRouterExtractor,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let result = action_input.process(&state.app_config)?;

    let result_json = serde_json::to_value(&result)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize response: {}", e)))?;

    Ok(Json(ApiResponse::success(result_json)))
}
