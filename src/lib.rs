// Public library interface for banque-service
pub mod accounts;
pub mod action_router;
pub mod api;
pub mod error;
pub mod graphql;
pub mod schema;
pub mod seed;
pub mod store;
pub mod transactions;
pub mod utils;
