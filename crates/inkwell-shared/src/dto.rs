//! Data Transfer Objects - request/response types for the API.
//!
//! Field names (`blog_title`, `blog_content`, `blog_image_url`, `date`)
//! are the wire contract and deliberately differ from the domain names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new blog post. Fields are optional so the
/// handler can report missing ones itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub blog_title: Option<String>,
    pub blog_content: Option<String>,
    pub blog_image_url: Option<String>,
}

/// Partial update of an existing blog post. Absent or empty fields
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub blog_title: Option<String>,
    pub blog_content: Option<String>,
    pub blog_image_url: Option<String>,
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub blog_title: String,
    pub blog_content: String,
    pub date: DateTime<Utc>,
    pub image: Option<String>,
}

/// Confirmation message for operations without a record body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
