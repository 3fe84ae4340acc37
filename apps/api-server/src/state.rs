//! Application state - shared across all handlers.

use std::sync::Arc;

use inkwell_core::error::UploadError;
use inkwell_core::media::MediaResolver;
use inkwell_core::ports::BlogRepository;
use inkwell_infra::database::InMemoryBlogRepository;
use inkwell_infra::media::FsUploadStore;

#[cfg(feature = "postgres")]
use inkwell_infra::database::PostgresBlogRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub media: Arc<MediaResolver>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, UploadError> {
        let uploads = Arc::new(FsUploadStore::new(config.upload_dir.clone()).await?);
        let media = Arc::new(MediaResolver::new(uploads));

        #[cfg(feature = "postgres")]
        let blogs: Arc<dyn BlogRepository> = {
            if let Some(db_config) = &config.database {
                match inkwell_infra::database::connect(db_config).await {
                    Ok(conn) => Arc::new(PostgresBlogRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryBlogRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBlogRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let blogs: Arc<dyn BlogRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryBlogRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self { blogs, media })
    }
}
