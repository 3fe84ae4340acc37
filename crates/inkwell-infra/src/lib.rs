//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`.
//! This crate contains the database repositories and the upload store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repository via SeaORM; without it
//!   only the in-memory repository is available.

pub mod database;
pub mod media;

// Re-exports - In-Memory
pub use database::InMemoryBlogRepository;
pub use media::{FsUploadStore, InMemoryUploadStore};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
