//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog API.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod media;
pub mod ports;

pub use error::DomainError;
