//! # Menu Infrastructure
//! 
//! Persistence adapters for the menu editor.

pub mod memory;

pub use memory::{InMemoryMenuRepository, sample_menu};
