use async_graphql::http::GraphiQLSource;
use axum::{extract::State, response::Html, Json};

use crate::api::ApiState;

/// POST /graphql
pub async fn graphql_handler(
    State(state): State<ApiState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// GET /graphql - GraphiQL explorer
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
