use async_trait::async_trait;

use crate::error::UploadError;

/// Durable storage for uploaded image files.
///
/// Implementations own name generation: `store` receives the original
/// filename and must return a collision-resistant relative reference
/// path the file can later be served under.
#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<String, UploadError>;
}
