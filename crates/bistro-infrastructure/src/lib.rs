//! # Bistro Infrastructure
//! 
//! File-backed implementations of the core repository ports (adapters).

pub mod menu;

pub use menu::FileMenuRepository;
