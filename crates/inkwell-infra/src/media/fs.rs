use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tracing::{debug, info};

use inkwell_core::error::UploadError;
use inkwell_core::ports::UploadStore;

/// Filesystem upload store.
///
/// Files land in a single server-controlled directory under a generated
/// name: millisecond timestamp prefix plus the sanitized original
/// filename. The returned reference path is relative (`uploads/<name>`)
/// and matches the static mount the server exposes the directory under.
#[derive(Debug, Clone)]
pub struct FsUploadStore {
    base_path: PathBuf,
}

/// Strip any directory components from a client-supplied filename.
/// Prevents path traversal out of the upload directory.
fn sanitize_filename(filename: &str) -> Result<&str, UploadError> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    if name.is_empty() || name.contains("..") {
        return Err(UploadError::InvalidFilename(filename.to_string()));
    }
    Ok(name)
}

impl FsUploadStore {
    pub async fn new(base_path: PathBuf) -> Result<Self, UploadError> {
        fs::create_dir_all(&base_path).await.map_err(|e| {
            UploadError::Io(format!(
                "Failed to create upload directory '{}': {}",
                base_path.display(),
                e
            ))
        })?;

        info!(path = %base_path.display(), "Upload store initialized");

        Ok(Self { base_path })
    }
}

#[async_trait]
impl UploadStore for FsUploadStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<String, UploadError> {
        let name = sanitize_filename(filename)?;
        let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), name);

        let path = self.base_path.join(&stored_name);
        fs::write(&path, data).await.map_err(|e| {
            UploadError::Io(format!("Failed to write upload {}: {}", stored_name, e))
        })?;

        debug!(name = %stored_name, size = data.len(), "Stored upload");
        Ok(format!("uploads/{stored_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_store() -> (FsUploadStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FsUploadStore::new(dir.path().to_path_buf()).await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_store_writes_file_under_generated_name() {
        let (store, dir) = test_store().await;

        let reference = store.store("cat.png", b"png-bytes").await.unwrap();

        let stored_name = reference.strip_prefix("uploads/").unwrap();
        assert!(stored_name.ends_with("-cat.png"));

        let on_disk = std::fs::read(dir.path().join(stored_name)).unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn test_traversal_components_are_stripped() {
        let (store, dir) = test_store().await;

        let reference = store.store("/etc/passwd/cat.png", b"x").await.unwrap();

        let stored_name = reference.strip_prefix("uploads/").unwrap();
        assert!(stored_name.ends_with("-cat.png"));
        assert!(dir.path().join(stored_name).exists());
    }

    #[tokio::test]
    async fn test_dotdot_filename_rejected() {
        let (store, _dir) = test_store().await;
        assert!(matches!(
            store.store("..", b"x").await,
            Err(UploadError::InvalidFilename(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_filename_rejected() {
        let (store, _dir) = test_store().await;
        assert!(store.store("", b"x").await.is_err());
        assert!(store.store("dir/", b"x").await.is_err());
    }
}
