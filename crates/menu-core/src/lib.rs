//! # Menu Core
//! 
//! Menu document model, mutation engine, persistence port, and editor
//! services for the restaurant menu editor.

pub mod domain;
pub mod engine;
pub mod repositories;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
