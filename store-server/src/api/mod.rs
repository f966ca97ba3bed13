//! HTTP API
//!
//! One module per resource, each exposing a `router()` merged by
//! [`crate::core::build_app`].

pub mod auth;
pub mod carousel;
pub mod config;
pub mod files;
pub mod health;
pub mod orders;
pub mod products;
pub mod upload;
pub mod user;
