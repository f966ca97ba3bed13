//! Domain models
//!
//! Entity + Create/Update payload triples for every resource, with the
//! field-level validation the handlers run before touching storage.
//! Wire field names stay in Spanish for the catalog/carousel resources
//! (the storefront frontend speaks that dialect).

pub mod carousel_slide;
pub mod order;
pub mod product;
pub mod site_config;
pub mod user;

pub use carousel_slide::{CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate};
pub use order::{
    Order, OrderCreate, OrderFieldsUpdate, OrderItem, OrderItemInput, OrderStatus, OrderSummary,
};
pub use product::{Product, ProductCreate, ProductPatch, ProductUpdate};
pub use site_config::{SiteConfig, SiteConfigUpdate};
pub use user::User;

use thiserror::Error;

/// Field-level validation failure, surfaced to clients as 400.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
