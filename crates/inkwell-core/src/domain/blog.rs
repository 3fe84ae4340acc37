use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::media::ImageRef;

/// BlogPost entity - one blog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub image: Option<ImageRef>,
}

/// Partial set of mutable fields for an update.
///
/// Empty-string title/content mean "leave untouched", matching the
/// truthy-field update semantics of the original API. There is no way to
/// clear an existing image through a patch.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageRef>,
}

impl BlogPost {
    /// Create a new post. Fails if title or content is empty.
    pub fn new(
        title: String,
        content: String,
        image: Option<ImageRef>,
    ) -> Result<Self, DomainError> {
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Title and content are required.".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            image,
        })
    }

    /// Apply a partial update. Only present, non-empty fields change;
    /// `id` and `created_at` are immutable.
    pub fn apply_patch(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(content) = patch.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}
