//! Core crawl-planning domain for alecrawl.
//!
//! Everything here is pure and synchronous: the haversine distance oracle,
//! the greedy crawl builder, and the multi-start crawl search, plus the
//! domain types they operate on and the env-driven application config.
//! Fetching candidates and presenting results live in the sibling crates.

mod app_config;
mod config;
mod crawl;
mod distance;
mod stop;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use crawl::{build_crawl, find_best_crawl};
pub use distance::distance_miles;
pub use stop::{Crawl, CrawlParams, CrawlStop, Stop};

use thiserror::Error;

/// Errors raised while loading the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
