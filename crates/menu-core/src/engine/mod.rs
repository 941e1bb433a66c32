//! # Menu Core - Mutation Engine
//! 
//! Pure, total transitions over [`MenuDocument`](crate::domain::MenuDocument)
//! values. Nothing here holds state; callers thread the current document
//! through each call.

pub mod edit;
pub mod id_generator;
pub mod intent;
pub mod mutations;

pub use edit::{MenuEdit, CategoryEdit, ItemEdit, Direction};
pub use id_generator::{IdGenerator, UuidIdGenerator, SequentialIdGenerator, id_generator_for};
pub use intent::{Intent, Applied, CreatedEntity, apply_intent};
pub use mutations::*;
