//! # Menu Shared
//! 
//! Constants, configuration, and telemetry shared by the menu editor crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
