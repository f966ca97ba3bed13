//! Repositories
//!
//! Free async functions over the shared `SqlitePool`, one module per
//! table. All of them return [`RepoResult`].

pub mod carousel;
pub mod order;
pub mod product;
pub mod site_config;
pub mod user;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InsufficientStock(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        RepoError::Database(e.to_string())
    }
}
