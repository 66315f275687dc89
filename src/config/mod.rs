use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Limits for the paginated search path
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub max_page_size: i64,
    pub facet_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            search: SearchConfig {
                max_page_size: env::var("SEARCH_MAX_PAGE_SIZE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SEARCH_MAX_PAGE_SIZE".to_string())
                    })?,
                facet_limit: env::var("SEARCH_FACET_LIMIT")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SEARCH_FACET_LIMIT".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.search.max_page_size < 1 {
            return Err(AppError::Configuration(
                "Search max page size must be at least 1".to_string(),
            ));
        }
        if self.search.facet_limit < 1 {
            return Err(AppError::Configuration(
                "Search facet limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
