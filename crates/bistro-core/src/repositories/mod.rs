//! Repository traits (ports)

pub mod menu_repository;

pub use menu_repository::{InMemoryMenuRepository, MenuRepository};
