pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graphql::{BankSchema, build_schema};
use crate::utils::app_config::AppConfig;
use config::ApiConfig;
use handlers::{graphql::*, health::health, mutation::process_mutation};

#[derive(Clone)]
pub struct ApiState {
    pub app_config: AppConfig,
    pub schema: BankSchema,
}

pub fn router(app_config: AppConfig, api_config: &ApiConfig) -> Router {
    let schema = build_schema(app_config.clone());
    let state = ApiState { app_config, schema };

    let graphql_route = if api_config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        // Health check
        .route("/health", get(health))
        // GraphQL queries and mutations
        .route("/graphql", graphql_route)
        // JSON action endpoint
        .route("/process", post(process_mutation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
