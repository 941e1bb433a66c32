//! # Menu Core - Domain Module
//! 
//! Menu document entities and their identities.

pub mod ids;
pub mod menu;

pub use ids::{MenuId, CategoryId, ItemId};
pub use menu::{MenuDocument, Category, Item, StructureViolation};
