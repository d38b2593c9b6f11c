//! Travel advisor API: destination suggestions from free-text queries and
//! travel preferences, with accounts and saved trips backed by MongoDB.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::AppConfig;
pub use error::ApiError;
pub use services::destination_catalog::DestinationCatalog;
pub use services::suitability::{SuitabilityScorer, SuitabilityWeights};
