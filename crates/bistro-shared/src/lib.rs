//! # Bistro Shared
//! 
//! Configuration, telemetry, constants, and common types for the bistro site.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
