use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Args, ValueEnum};

use crate::store::{BankStore, MemoryStore, SqliteStore};
use crate::utils::db::IN_MEMORY_URL;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// diesel over SQLite; `:memory:` unless a database url is given
    Sqlite,
    /// plain maps, nothing touches SQLite
    Memory,
}

#[derive(Args, Debug, Clone)]
pub struct StoreConfig {
    #[arg(long = "store", env = "STORE_BACKEND", value_enum, default_value = "sqlite")]
    pub backend: StoreBackend,
    #[arg(long, env = "DATABASE_URL", default_value = IN_MEMORY_URL)]
    pub database_url: String,
    /// Insert the demo accounts and transactions at startup.
    #[arg(long, env = "SEED_DEMO_DATA", default_value_t = true, action = ArgAction::Set)]
    pub seed: bool,
}

/// Shared state handed to every handler and resolver.
#[derive(Clone)]
pub struct AppConfig {
    pub store: Arc<dyn BankStore>,
}

impl AppConfig {
    pub fn new(store: Arc<dyn BankStore>) -> Self {
        Self { store }
    }

    pub fn from_store_config(config: &StoreConfig) -> Result<Self> {
        let store: Arc<dyn BankStore> = match config.backend {
            StoreBackend::Sqlite => Arc::new(SqliteStore::connect(&config.database_url)?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };

        Ok(Self::new(store))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        store: StoreConfig,
    }

    #[test]
    fn test_defaults_to_in_memory_sqlite_with_seed() {
        let cli = TestCli::try_parse_from(["banque-service"]).unwrap();

        assert_eq!(cli.store.backend, StoreBackend::Sqlite);
        assert_eq!(cli.store.database_url, IN_MEMORY_URL);
        assert!(cli.store.seed);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::try_parse_from(["banque-service", "--store", "memory", "--seed", "false"])
            .unwrap();

        assert_eq!(cli.store.backend, StoreBackend::Memory);
        assert!(!cli.store.seed);
    }

    #[test]
    fn test_builds_each_backend() -> Result<()> {
        for backend in [StoreBackend::Sqlite, StoreBackend::Memory] {
            let config = StoreConfig {
                backend,
                database_url: IN_MEMORY_URL.to_string(),
                seed: false,
            };
            let app_config = AppConfig::from_store_config(&config)?;
            assert_eq!(app_config.store.count_accounts()?, 0);
        }
        Ok(())
    }
}
