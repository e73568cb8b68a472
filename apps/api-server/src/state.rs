//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use newsdesk_core::ports::{Cache, Clock, PostRepository, SystemClock, TextGenerator};
use newsdesk_core::service::{FeaturedWindow, PostService};
use newsdesk_infra::cache::InMemoryCache;
use newsdesk_infra::database::InMemoryPostRepository;
use newsdesk_infra::textgen::{CannedTextGenerator, HttpTextGenerator, TextGenConfig};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PostRepository>,
    pub posts: Arc<PostService>,
    pub landing: Arc<FeaturedWindow>,
    pub cache: Arc<dyn Cache>,
    pub textgen: Arc<dyn TextGenerator>,
    pub clock: Arc<dyn Clock>,
    pub landing_cache_ttl: Duration,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());

        let repo = Self::build_repo(config).await;

        let textgen: Arc<dyn TextGenerator> = match &config.textgen_url {
            Some(url) => Arc::new(HttpTextGenerator::new(TextGenConfig::new(url.clone()))),
            None => Arc::new(CannedTextGenerator::new()),
        };

        let posts = Arc::new(PostService::new(repo.clone(), clock.clone()));
        let landing = Arc::new(FeaturedWindow::new(repo.clone()));

        tracing::info!("Application state initialized");

        Self {
            repo,
            posts,
            landing,
            cache,
            textgen,
            clock,
            landing_cache_ttl: Duration::from_secs(config.landing_cache_ttl_secs),
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repo(config: &AppConfig) -> Arc<dyn PostRepository> {
        use newsdesk_infra::database::{PostgresPostRepository, connect};

        if let Some(db_config) = &config.database {
            match connect(db_config).await {
                Ok(conn) => return Arc::new(PostgresPostRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }
        Arc::new(InMemoryPostRepository::new())
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repo(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
