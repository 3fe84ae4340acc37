//! Upload storage implementations for the [`UploadStore`] port.
//!
//! [`UploadStore`]: inkwell_core::ports::UploadStore

mod fs;
mod memory;

pub use fs::FsUploadStore;
pub use memory::InMemoryUploadStore;
