pub mod app_config;
pub mod db;
pub mod decimal;
pub mod traits;
