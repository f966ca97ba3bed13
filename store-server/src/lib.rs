//! Storefront admin backend
//!
//! HTTP/JSON API for a small online store: product catalog, home page
//! carousel, orders with stock consistency, site configuration and a
//! single admin account over SQLite.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult};
