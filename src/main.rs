use std::env;

use banque_service::{
    api::{self, config::ApiConfig},
    seed::seed_demo_data,
    utils::app_config::{AppConfig, StoreBackend, StoreConfig},
};
use clap::Parser;
use dotenvy::dotenv;

#[derive(Parser, Debug)]
#[command(name = "banque-service", version, about = "Accounts and transactions over GraphQL")]
struct Cli {
    #[command(flatten)]
    api: ApiConfig,
    #[command(flatten)]
    store: StoreConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let cli = Cli::parse();

    let app_config = AppConfig::from_store_config(&cli.store)?;
    match cli.store.backend {
        StoreBackend::Sqlite => tracing::info!(
            database_url = %cli.store.database_url,
            "SQLite store ready"
        ),
        StoreBackend::Memory => tracing::info!("in-memory store ready"),
    }

    if cli.store.seed {
        seed_demo_data(app_config.store.as_ref())?;
    }

    let router = api::router(app_config, &cli.api);

    let addr = cli.api.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting banque API server on {}", addr);
    if cli.api.graphiql {
        tracing::info!("GraphiQL available at http://{}/graphql", addr);
    }

    axum::serve(listener, router).await?;

    Ok(())
}
