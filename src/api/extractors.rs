use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::action_router::ActionRouterInput;
use crate::api::error::ApiError;

/// Top-level keys accepted by `POST /process`.
const ACTION_DOMAINS: [&str; 2] = ["Accounts", "Transactions"];

/// Reads a `POST /process` body into an [`ActionRouterInput`].
///
/// The body names exactly one domain, e.g. `{"Transactions": "TransactionStats"}`.
/// An unknown domain is rejected by name before its action is parsed.
pub struct ActionRouterExtractor(pub ActionRouterInput);

#[async_trait]
impl<S> FromRequest<S> for ActionRouterExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        let domain = match value.as_object() {
            Some(obj) if obj.len() == 1 => obj.keys().next().cloned(),
            _ => None,
        };
        let Some(domain) = domain else {
            return Err(ApiError::bad_request(format!(
                "Request body must be an object with exactly one key, one of: {}",
                ACTION_DOMAINS.join(", ")
            )));
        };

        if !ACTION_DOMAINS.contains(&domain.as_str()) {
            return Err(ApiError::bad_request(format!(
                "Unknown action domain `{}`, expected one of: {}",
                domain,
                ACTION_DOMAINS.join(", ")
            )));
        }

        let action = serde_json::from_value(value)
            .map_err(|e| ApiError::bad_request(format!("Invalid {} action: {}", domain, e)))?;

        Ok(ActionRouterExtractor(action))
    }
}
