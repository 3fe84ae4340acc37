//! Media attachment handling.
//!
//! Unifies the two image-input strategies (external URL vs. multipart
//! upload) behind a single resolver producing a tagged [`ImageRef`]. The
//! resolver owns validation; the actual byte storage goes through the
//! [`UploadStore`] port so this crate stays free of filesystem code.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::ports::UploadStore;

static IMAGE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(http|https)://[^ "]+$"#).expect("valid image URL regex"));

/// Image media types accepted for upload, matched against both the file
/// extension and the declared content type.
const ALLOWED_IMAGE_TYPES: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Reference to a post's image: an external URL or a path to a
/// server-stored upload. Stored and serialized as the plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Upload(String),
}

impl ImageRef {
    /// Classify a stored string: absolute http(s) URLs are external,
    /// anything else is a path under the upload directory.
    pub fn parse(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.starts_with("http://") || s.starts_with("https://") {
            ImageRef::Url(s)
        } else {
            ImageRef::Upload(s)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Url(s) | ImageRef::Upload(s) => s,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            ImageRef::Url(s) | ImageRef::Upload(s) => s,
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ImageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ImageRef::parse)
    }
}

/// A binary image part extracted from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Image input carried by a create/update request. Both fields absent
/// means the request has no image.
#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    pub url: Option<String>,
    pub file: Option<UploadedImage>,
}

/// Resolves request image input into an [`ImageRef`].
pub struct MediaResolver {
    uploads: Arc<dyn UploadStore>,
}

impl MediaResolver {
    pub fn new(uploads: Arc<dyn UploadStore>) -> Self {
        Self { uploads }
    }

    /// Resolve an image input. An uploaded file wins over a URL field in
    /// the same request; an empty URL string counts as absent.
    pub async fn resolve(&self, input: ImageInput) -> Result<Option<ImageRef>, DomainError> {
        if let Some(file) = input.file {
            check_image_type(&file)?;

            let path = self
                .uploads
                .store(&file.filename, &file.data)
                .await
                .map_err(|e| DomainError::Internal(e.to_string()))?;

            tracing::debug!(path = %path, "Stored uploaded image");
            return Ok(Some(ImageRef::Upload(path)));
        }

        match input.url {
            Some(url) if !url.is_empty() => {
                if !IMAGE_URL_RE.is_match(&url) {
                    return Err(DomainError::Validation(format!(
                        "{} is not a valid URL!",
                        url
                    )));
                }
                Ok(Some(ImageRef::Url(url)))
            }
            _ => Ok(None),
        }
    }
}

/// Check an uploaded file against the image allow-list. The extension
/// and the declared content type must both agree.
fn check_image_type(file: &UploadedImage) -> Result<(), DomainError> {
    let extension = file
        .filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let subtype = file
        .content_type
        .split_once('/')
        .map(|(_, sub)| sub.to_ascii_lowercase());

    let ext_ok = extension
        .as_deref()
        .is_some_and(|e| ALLOWED_IMAGE_TYPES.contains(&e));
    let type_ok = subtype
        .as_deref()
        .is_some_and(|s| ALLOWED_IMAGE_TYPES.contains(&s));

    if ext_ok && type_ok {
        Ok(())
    } else {
        Err(DomainError::UnsupportedMedia(format!(
            "Only jpeg, jpg, png and gif images are allowed (got '{}', {})",
            file.filename, file.content_type
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Upload store that records calls without touching the filesystem.
    #[derive(Default)]
    struct RecordingStore {
        stored: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UploadStore for RecordingStore {
        async fn store(&self, filename: &str, _data: &[u8]) -> Result<String, UploadError> {
            let path = format!("uploads/{filename}");
            self.stored.lock().unwrap().push(path.clone());
            Ok(path)
        }
    }

    fn resolver() -> (MediaResolver, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        (MediaResolver::new(store.clone()), store)
    }

    fn png(filename: &str, content_type: &str) -> UploadedImage {
        UploadedImage {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn absent_input_resolves_to_none() {
        let (resolver, store) = resolver();
        let resolved = resolver.resolve(ImageInput::default()).await.unwrap();
        assert_eq!(resolved, None);
        assert!(store.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_url_counts_as_absent() {
        let (resolver, _) = resolver();
        let input = ImageInput {
            url: Some(String::new()),
            file: None,
        };
        assert_eq!(resolver.resolve(input).await.unwrap(), None);
    }

    #[tokio::test]
    async fn valid_url_round_trips() {
        let (resolver, _) = resolver();
        let input = ImageInput {
            url: Some("https://example.com/cat.png".to_string()),
            file: None,
        };
        assert_eq!(
            resolver.resolve(input).await.unwrap(),
            Some(ImageRef::Url("https://example.com/cat.png".to_string()))
        );
    }

    #[tokio::test]
    async fn malformed_urls_are_rejected() {
        let (resolver, _) = resolver();
        for bad in ["ftp://example.com/a.png", "example.com/a.png", "http://a b"] {
            let input = ImageInput {
                url: Some(bad.to_string()),
                file: None,
            };
            assert!(
                matches!(
                    resolver.resolve(input).await,
                    Err(DomainError::Validation(_))
                ),
                "expected rejection for {bad}"
            );
        }
    }

    #[tokio::test]
    async fn uploaded_file_wins_over_url() {
        let (resolver, store) = resolver();
        let input = ImageInput {
            url: Some("https://example.com/ignored.png".to_string()),
            file: Some(png("cat.png", "image/png")),
        };

        let resolved = resolver.resolve(input).await.unwrap();
        assert_eq!(
            resolved,
            Some(ImageRef::Upload("uploads/cat.png".to_string()))
        );
        assert_eq!(store.stored.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn allow_list_is_case_insensitive() {
        let (resolver, _) = resolver();
        let input = ImageInput {
            url: None,
            file: Some(png("CAT.PNG", "image/PNG")),
        };
        assert!(resolver.resolve(input).await.is_ok());
    }

    #[tokio::test]
    async fn disallowed_type_is_rejected_without_storing() {
        let (resolver, store) = resolver();
        let input = ImageInput {
            url: None,
            file: Some(png("notes.txt", "text/plain")),
        };

        assert!(matches!(
            resolver.resolve(input).await,
            Err(DomainError::UnsupportedMedia(_))
        ));
        assert!(store.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn extension_and_content_type_must_agree() {
        let (resolver, _) = resolver();
        // png extension with a non-image declared type
        let input = ImageInput {
            url: None,
            file: Some(png("cat.png", "application/octet-stream")),
        };
        assert!(matches!(
            resolver.resolve(input).await,
            Err(DomainError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn image_ref_classifies_by_prefix() {
        assert_eq!(
            ImageRef::parse("http://example.com/a.gif"),
            ImageRef::Url("http://example.com/a.gif".to_string())
        );
        assert_eq!(
            ImageRef::parse("uploads/170000-a.gif"),
            ImageRef::Upload("uploads/170000-a.gif".to_string())
        );
    }
}
