//! Application configuration loaded from environment variables.

use std::env;

use newsdesk_infra::database::DatabaseConfig;

/// Stale-featured sweep configuration.
///
/// Off by default: a featured post that falls out of the 24h display window
/// keeps its flag unless the sweep is explicitly enabled.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub enabled: bool,
    /// Six-field cron expression; hourly on the hour by default.
    pub schedule: String,
}

impl SweepConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("FEATURED_SWEEP_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            schedule: env::var("FEATURED_SWEEP_SCHEDULE")
                .unwrap_or_else(|_| "0 0 * * * *".to_string()),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Base URL of the text-generation service; canned drafts when unset.
    pub textgen_url: Option<String>,
    /// How long the landing featured response may be served from cache.
    pub landing_cache_ttl_secs: u64,
    pub sweep: SweepConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            textgen_url: env::var("TEXTGEN_URL").ok(),
            landing_cache_ttl_secs: env::var("LANDING_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            sweep: SweepConfig::from_env(),
        }
    }
}
