//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu data not found: {0}")]
    MenuDataNotFound(String),

    #[error("Menu data unreadable: {0}")]
    MenuDataUnreadable(String),

    #[error("Menu data malformed: {0}")]
    MenuDataMalformed(String),

    #[error("Unsupported menu data format: {0}")]
    UnsupportedFormat(String),
}
