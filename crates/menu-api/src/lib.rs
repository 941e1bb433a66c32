//! # Menu API
//! 
//! HTTP handlers, DTOs, and routing for menu editing sessions.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod sessions;
pub mod state;

pub use routes::router;
pub use sessions::SessionStore;
pub use state::AppState;
