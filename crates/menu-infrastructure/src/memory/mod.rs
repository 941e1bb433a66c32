//! In-process adapters

pub mod menu_repo_impl;
pub mod seed;

pub use menu_repo_impl::InMemoryMenuRepository;
pub use seed::sample_menu;
