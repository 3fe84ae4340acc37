//! In-memory upload store - keeps uploaded bytes in a map instead of on
//! disk. Useful in tests and when no durable storage is wanted.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use inkwell_core::error::UploadError;
use inkwell_core::ports::UploadStore;

pub struct InMemoryUploadStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryUploadStore {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Read back a stored upload by its reference path.
    pub async fn get(&self, reference: &str) -> Option<Vec<u8>> {
        let files = self.files.read().await;
        files.get(reference).cloned()
    }
}

impl Default for InMemoryUploadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadStore for InMemoryUploadStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<String, UploadError> {
        let reference = format!("uploads/{}-{}", Utc::now().timestamp_millis(), filename);

        let mut files = self.files.write().await;
        files.insert(reference.clone(), data.to_vec());

        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_get() {
        let store = InMemoryUploadStore::new();
        let reference = store.store("cat.png", b"bytes").await.unwrap();

        assert!(reference.starts_with("uploads/"));
        assert_eq!(store.get(&reference).await, Some(b"bytes".to_vec()));
    }
}
