//! HTTP handlers

pub mod editor;
pub mod health;
