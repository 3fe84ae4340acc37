//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod upload_store;

pub use repository::{BaseRepository, BlogRepository};
pub use upload_store::UploadStore;
