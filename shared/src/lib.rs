//! Shared types for the storefront backend
//!
//! Domain models and their create/update payloads, field validation,
//! and small time helpers used by the server crate.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
