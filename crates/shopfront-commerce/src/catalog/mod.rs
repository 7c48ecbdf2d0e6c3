//! Product catalog module.
//!
//! Contains the product record, the session catalog and category listing.

mod category;
mod feed;
mod product;

pub use category::{categories, category_options, ALL_CATEGORIES};
pub use feed::Catalog;
pub use product::{Product, Rating};
